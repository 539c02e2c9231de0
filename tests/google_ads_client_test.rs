use anyhow::Result;
use httpmock::prelude::*;
use keyword_planner::domain::model::{CompetitionLevel, GlobalVolumeSource};
use keyword_planner::{AppConfig, GoogleAdsClient, KeywordQuery, KeywordService, PlannerError};
use serde_json::json;
use std::sync::Arc;

const CUSTOMER_ID: &str = "1234567890";
const IDEAS_PATH: &str = "/v17/customers/1234567890:generateKeywordIdeas";

fn test_config(server: &MockServer) -> Result<AppConfig> {
    let content = format!(
        r#"
[google_ads]
developer_token = "dev-token"
client_id = "client-id"
client_secret = "client-secret"
refresh_token = "refresh-token"
login_customer_id = "123-456-7890"
api_version = "v17"
endpoint = "{}"
token_endpoint = "{}"
timeout_seconds = 5
"#,
        server.base_url(),
        server.url("/token")
    );
    Ok(AppConfig::from_toml_str(&content)?)
}

fn mock_token(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/token")
            .body_contains("grant_type=refresh_token")
            .body_contains("refresh_token=refresh-token");
        then.status(200).json_body(json!({
            "access_token": "ya29.test-token",
            "expires_in": 3599,
            "token_type": "Bearer"
        }));
    })
}

fn ideas_body(location: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "language": "languageConstants/1000",
        "includeAdultKeywords": false,
        "keywordPlanNetwork": "GOOGLE_SEARCH_AND_PARTNERS",
        "keywordSeed": { "keywords": ["running shoes"] }
    });
    if let Some(id) = location {
        body["geoTargetConstants"] = json!([format!("geoTargetConstants/{}", id)]);
    }
    body
}

/// 國內查詢帶地區、授權標頭，int64 以字串傳回
#[tokio::test]
async fn test_generate_keyword_ideas_domestic_request() -> Result<()> {
    let server = MockServer::start();
    let token_mock = mock_token(&server);

    let ideas_mock = server.mock(|when, then| {
        when.method(POST)
            .path(IDEAS_PATH)
            .header("developer-token", "dev-token")
            .header("login-customer-id", CUSTOMER_ID)
            .header("authorization", "Bearer ya29.test-token")
            .json_body(ideas_body(Some("2840")));
        then.status(200).json_body(json!({
            "results": [
                {
                    "text": "running shoes for women",
                    "keywordIdeaMetrics": {
                        "competition": "MEDIUM",
                        "avgMonthlySearches": "12100",
                        "competitionIndex": "55",
                        "averageCpcMicros": "980000"
                    }
                },
                {
                    "text": "running shoes",
                    "keywordIdeaMetrics": {
                        "competition": "HIGH",
                        "avgMonthlySearches": "246000",
                        "competitionIndex": "100",
                        "averageCpcMicros": "1530000"
                    }
                }
            ]
        }));
    });

    let client = GoogleAdsClient::from_config(&test_config(&server)?)?;
    let rows = client
        .generate_keyword_ideas("running shoes", "1000", Some("2840"))
        .await?;

    token_mock.assert();
    ideas_mock.assert();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].text, "running shoes");
    assert_eq!(rows[1].avg_monthly_searches, Some(246_000));
    assert_eq!(rows[1].competition, CompetitionLevel::High);
    assert_eq!(rows[1].competition_index, Some(100));
    assert_eq!(rows[1].avg_cpc_micros, Some(1_530_000));

    Ok(())
}

/// access token 在有效期內只取一次
#[tokio::test]
async fn test_access_token_is_cached_between_requests() -> Result<()> {
    let server = MockServer::start();
    let token_mock = mock_token(&server);

    let ideas_mock = server.mock(|when, then| {
        when.method(POST).path(IDEAS_PATH);
        then.status(200).json_body(json!({ "results": [] }));
    });

    let client = GoogleAdsClient::from_config(&test_config(&server)?)?;
    client
        .generate_keyword_ideas("running shoes", "1000", Some("2840"))
        .await?;
    client
        .generate_keyword_ideas("running shoes", "1000", None)
        .await?;

    token_mock.assert_hits(1);
    ideas_mock.assert_hits(2);

    Ok(())
}

/// 國內與全球兩次查詢合併成一筆紀錄
#[tokio::test]
async fn test_service_combines_domestic_and_global() -> Result<()> {
    let server = MockServer::start();
    mock_token(&server);

    let domestic_mock = server.mock(|when, then| {
        when.method(POST)
            .path(IDEAS_PATH)
            .json_body(ideas_body(Some("2840")));
        then.status(200).json_body(json!({
            "results": [{
                "text": "running shoes",
                "keywordIdeaMetrics": {
                    "competition": "HIGH",
                    "avgMonthlySearches": "246000",
                    "competitionIndex": "100",
                    "averageCpcMicros": "1530000"
                }
            }]
        }));
    });

    let global_mock = server.mock(|when, then| {
        when.method(POST).path(IDEAS_PATH).json_body(ideas_body(None));
        then.status(200).json_body(json!({
            "results": [{
                "text": "Running Shoes",
                "keywordIdeaMetrics": { "avgMonthlySearches": "1500000" }
            }]
        }));
    });

    let client = GoogleAdsClient::from_config(&test_config(&server)?)?;
    let service = KeywordService::new(Arc::new(client));
    let record = service
        .lookup(&KeywordQuery::new("running shoes", "1000", "2840"))
        .await?
        .expect("record");

    domestic_mock.assert();
    global_mock.assert();

    assert_eq!(record.keyword, "running shoes");
    assert_eq!(record.volume_domestic, 246_000);
    assert_eq!(record.volume_global, 1_500_000);
    assert_eq!(record.global_volume_source, GlobalVolumeSource::Global);
    assert_eq!(record.cpc, Some(1.53));

    Ok(())
}

/// 全球查詢失敗時回退到國內搜尋量
#[tokio::test]
async fn test_service_falls_back_when_global_request_fails() -> Result<()> {
    let server = MockServer::start();
    mock_token(&server);

    server.mock(|when, then| {
        when.method(POST)
            .path(IDEAS_PATH)
            .json_body(ideas_body(Some("2840")));
        then.status(200).json_body(json!({
            "results": [{
                "text": "running shoes",
                "keywordIdeaMetrics": { "avgMonthlySearches": "8100", "competitionIndex": "40" }
            }]
        }));
    });

    server.mock(|when, then| {
        when.method(POST).path(IDEAS_PATH).json_body(ideas_body(None));
        then.status(429).json_body(json!({
            "error": { "code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED" }
        }));
    });

    let client = GoogleAdsClient::from_config(&test_config(&server)?)?;
    let service = KeywordService::new(Arc::new(client));
    let record = service
        .lookup(&KeywordQuery::new("running shoes", "1000", "2840"))
        .await?
        .expect("record");

    assert_eq!(record.volume_global, 8100);
    assert!(record.is_global_fallback());
    assert_eq!(record.cpc, None);

    Ok(())
}

#[tokio::test]
async fn test_api_error_envelope_becomes_google_ads_error() -> Result<()> {
    let server = MockServer::start();
    mock_token(&server);

    server.mock(|when, then| {
        when.method(POST).path(IDEAS_PATH);
        then.status(403).json_body(json!({
            "error": {
                "code": 403,
                "message": "The caller does not have permission",
                "status": "PERMISSION_DENIED",
                "details": [{
                    "@type": "type.googleapis.com/google.ads.googleads.v17.errors.GoogleAdsFailure",
                    "errors": [{
                        "errorCode": { "authorizationError": "DEVELOPER_TOKEN_NOT_APPROVED" },
                        "message": "The developer token is only approved for use with test accounts."
                    }]
                }]
            }
        }));
    });

    let client = GoogleAdsClient::from_config(&test_config(&server)?)?;
    let err = client
        .generate_keyword_ideas("running shoes", "1000", Some("2840"))
        .await
        .unwrap_err();

    match err {
        PlannerError::GoogleAdsError {
            status,
            message,
            details,
        } => {
            assert_eq!(status, 403);
            assert_eq!(message, "The caller does not have permission");
            assert_eq!(details.len(), 1);
            assert!(details[0].contains("DEVELOPER_TOKEN_NOT_APPROVED"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_token_endpoint_rejection_is_auth_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(400).json_body(json!({
            "error": "invalid_grant",
            "error_description": "Token has been expired or revoked."
        }));
    });
    let ideas_mock = server.mock(|when, then| {
        when.method(POST).path(IDEAS_PATH);
        then.status(200).json_body(json!({ "results": [] }));
    });

    let client = GoogleAdsClient::from_config(&test_config(&server)?)?;
    let err = client
        .generate_keyword_ideas("running shoes", "1000", Some("2840"))
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::AuthError { ref message } if message.contains("invalid_grant")));
    ideas_mock.assert_hits(0);

    Ok(())
}

#[tokio::test]
async fn test_list_accessible_customers() -> Result<()> {
    let server = MockServer::start();
    mock_token(&server);

    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v17/customers:listAccessibleCustomers")
            .header("developer-token", "dev-token");
        then.status(200).json_body(json!({
            "resourceNames": ["customers/1234567890", "customers/9876543210"]
        }));
    });

    let client = GoogleAdsClient::from_config(&test_config(&server)?)?;
    let customers = client.list_accessible_customers().await?;

    list_mock.assert();
    assert_eq!(customers, vec!["1234567890", "9876543210"]);

    Ok(())
}
