use crate::adapters::oauth::{AccessToken, OAuthClient};
use crate::config::toml_config::AppConfig;
use crate::domain::model::{CompetitionLevel, RawMetric};
use crate::domain::ports::KeywordIdeaSource;
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::Mutex;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateKeywordIdeasRequest<'a> {
    language: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    geo_target_constants: Vec<String>,
    include_adult_keywords: bool,
    keyword_plan_network: &'a str,
    keyword_seed: KeywordSeed<'a>,
}

#[derive(Debug, Serialize)]
struct KeywordSeed<'a> {
    keywords: Vec<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateKeywordIdeasResponse {
    #[serde(default)]
    results: Vec<KeywordIdeaResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeywordIdeaResult {
    #[serde(default)]
    text: String,
    keyword_idea_metrics: Option<KeywordIdeaMetrics>,
}

// REST 介面的 int64 欄位以字串傳回
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeywordIdeaMetrics {
    competition: Option<String>,
    #[serde(default, deserialize_with = "int64_field")]
    avg_monthly_searches: Option<i64>,
    #[serde(default, deserialize_with = "int64_field")]
    competition_index: Option<i64>,
    #[serde(default, deserialize_with = "int64_field")]
    average_cpc_micros: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListAccessibleCustomersResponse {
    #[serde(default)]
    resource_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    errors: Vec<GoogleAdsFailureItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleAdsFailureItem {
    #[serde(default)]
    message: String,
    error_code: Option<serde_json::Value>,
}

/// 無法解析的值視為缺漏，不讓整筆回應失敗
fn int64_field<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    if parsed.is_none() {
        tracing::warn!("Ignoring malformed int64 metric value: {}", value);
    }
    Ok(parsed)
}

impl From<KeywordIdeaResult> for RawMetric {
    fn from(result: KeywordIdeaResult) -> Self {
        let metrics = result.keyword_idea_metrics.unwrap_or_default();
        RawMetric {
            text: result.text,
            avg_monthly_searches: metrics
                .avg_monthly_searches
                .and_then(|v| u64::try_from(v).ok()),
            competition: metrics
                .competition
                .as_deref()
                .map(CompetitionLevel::from_api_label)
                .unwrap_or_default(),
            competition_index: metrics
                .competition_index
                .and_then(|v| u32::try_from(v).ok()),
            avg_cpc_micros: metrics.average_cpc_micros,
        }
    }
}

/// REST client for the Google Ads API. Built once per process and shared.
pub struct GoogleAdsClient {
    http: Client,
    oauth: OAuthClient,
    refresh_token: String,
    developer_token: String,
    login_customer_id: Option<String>,
    customer_id: Option<String>,
    base_url: String,
    network: String,
    include_adult_keywords: bool,
    token: Mutex<Option<AccessToken>>,
}

impl GoogleAdsClient {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let ads = &config.google_ads;
        let http = Client::builder().timeout(ads.timeout()).build()?;

        let oauth = OAuthClient::new(
            http.clone(),
            ads.token_endpoint.clone(),
            ads.client_id.clone(),
            ads.client_secret.clone(),
        );

        let client = Self {
            http,
            oauth,
            refresh_token: ads.refresh_token.clone(),
            developer_token: ads.developer_token.clone(),
            login_customer_id: ads.login_customer_id(),
            customer_id: ads.customer_id().ok(),
            base_url: format!(
                "{}/{}",
                ads.endpoint.trim_end_matches('/'),
                ads.api_version.trim_matches('/')
            ),
            network: config.defaults.network.clone(),
            include_adult_keywords: config.defaults.include_adult_keywords,
            token: Mutex::new(None),
        };

        tracing::info!("Google Ads API client initialised ({})", client.base_url);
        Ok(client)
    }

    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh_at(Utc::now())) {
            return Ok(token.token.clone());
        }

        let token = self.oauth.refresh_access_token(&self.refresh_token).await?;
        let value = token.token.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.access_token().await?;
        let mut builder = builder
            .bearer_auth(token)
            .header("developer-token", &self.developer_token);
        if let Some(login) = &self.login_customer_id {
            builder = builder.header("login-customer-id", login);
        }
        Ok(builder)
    }

    pub async fn generate_keyword_ideas(
        &self,
        keyword: &str,
        language_id: &str,
        location_id: Option<&str>,
    ) -> Result<Vec<RawMetric>> {
        let customer_id =
            self.customer_id
                .as_deref()
                .ok_or_else(|| PlannerError::MissingConfigError {
                    field: "google_ads.customer_id (or login_customer_id)".to_string(),
                })?;

        let request = GenerateKeywordIdeasRequest {
            language: format!("languageConstants/{}", language_id),
            geo_target_constants: location_id
                .map(|id| vec![format!("geoTargetConstants/{}", id)])
                .unwrap_or_default(),
            include_adult_keywords: self.include_adult_keywords,
            keyword_plan_network: &self.network,
            keyword_seed: KeywordSeed {
                keywords: vec![keyword],
            },
        };

        let url = format!(
            "{}/customers/{}:generateKeywordIdeas",
            self.base_url, customer_id
        );
        tracing::debug!(
            "POST {} (keyword='{}', location={:?})",
            url,
            keyword,
            location_id
        );

        let response = self
            .authorized(self.http.post(&url))
            .await?
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: GenerateKeywordIdeasResponse = response.json().await?;
        tracing::debug!("Received {} keyword ideas", body.results.len());

        Ok(body.results.into_iter().map(RawMetric::from).collect())
    }

    /// Customer IDs (ten digits, no dashes) the credentials can access.
    pub async fn list_accessible_customers(&self) -> Result<Vec<String>> {
        let url = format!("{}/customers:listAccessibleCustomers", self.base_url);
        tracing::debug!("GET {}", url);

        let token = self.access_token().await?;
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header("developer-token", &self.developer_token)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: ListAccessibleCustomersResponse = response.json().await?;

        Ok(body
            .resource_names
            .iter()
            .filter_map(|name| name.rsplit('/').next())
            .map(|id| id.replace('-', ""))
            .collect())
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let (message, details) = match serde_json::from_str::<ApiErrorEnvelope>(&text) {
            Ok(envelope) => {
                let details: Vec<String> = envelope
                    .error
                    .details
                    .into_iter()
                    .flat_map(|d| d.errors)
                    .map(|e| match e.error_code {
                        Some(code) => format!("{}: {}", code, e.message),
                        None => e.message,
                    })
                    .collect();
                (envelope.error.message, details)
            }
            Err(_) => (format!("HTTP {}", status), vec![text]),
        };

        tracing::error!("Google Ads API error ({}): {}", status.as_u16(), message);
        for detail in &details {
            tracing::error!("\t{}", detail);
        }

        Err(PlannerError::GoogleAdsError {
            status: status.as_u16(),
            message,
            details,
        })
    }
}

#[async_trait]
impl KeywordIdeaSource for GoogleAdsClient {
    async fn generate_keyword_ideas(
        &self,
        keyword: &str,
        language_id: &str,
        location_id: Option<&str>,
    ) -> Result<Vec<RawMetric>> {
        GoogleAdsClient::generate_keyword_ideas(self, keyword, language_id, location_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_parsing_accepts_string_int64() {
        let json = serde_json::json!({
            "results": [
                {
                    "text": "running shoes",
                    "keywordIdeaMetrics": {
                        "competition": "HIGH",
                        "avgMonthlySearches": "246000",
                        "competitionIndex": "100",
                        "averageCpcMicros": "1530000"
                    }
                },
                { "text": "shoe idea without metrics" }
            ]
        });

        let body: GenerateKeywordIdeasResponse = serde_json::from_value(json).unwrap();
        let rows: Vec<RawMetric> = body.results.into_iter().map(RawMetric::from).collect();

        assert_eq!(rows[0].avg_monthly_searches, Some(246_000));
        assert_eq!(rows[0].competition, CompetitionLevel::High);
        assert_eq!(rows[0].competition_index, Some(100));
        assert_eq!(rows[0].avg_cpc_micros, Some(1_530_000));

        assert_eq!(rows[1].text, "shoe idea without metrics");
        assert_eq!(rows[1].avg_monthly_searches, None);
        assert_eq!(rows[1].competition, CompetitionLevel::Unspecified);
    }

    #[test]
    fn test_malformed_metric_value_becomes_absent() {
        let json = serde_json::json!({
            "results": [
                {
                    "text": "seo tools",
                    "keywordIdeaMetrics": {
                        "avgMonthlySearches": "1000",
                        "competitionIndex": "n/a",
                        "averageCpcMicros": 1.5
                    }
                },
                {
                    "text": "seo",
                    "keywordIdeaMetrics": { "avgMonthlySearches": "5000", "competitionIndex": true }
                }
            ]
        });

        let body: GenerateKeywordIdeasResponse = serde_json::from_value(json).unwrap();
        let rows: Vec<RawMetric> = body.results.into_iter().map(RawMetric::from).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].avg_monthly_searches, Some(1000));
        assert_eq!(rows[0].competition_index, None);
        assert_eq!(rows[0].avg_cpc_micros, None);
        assert_eq!(rows[1].text, "seo");
        assert_eq!(rows[1].avg_monthly_searches, Some(5000));
        assert_eq!(rows[1].competition_index, None);
    }

    #[test]
    fn test_result_parsing_accepts_numbers() {
        let json = serde_json::json!({
            "text": "x",
            "keywordIdeaMetrics": { "avgMonthlySearches": 10, "competitionIndex": 5 }
        });
        let result: KeywordIdeaResult = serde_json::from_value(json).unwrap();
        let row = RawMetric::from(result);
        assert_eq!(row.avg_monthly_searches, Some(10));
        assert_eq!(row.avg_cpc_micros, None);
    }

    #[test]
    fn test_request_body_uses_resource_names() {
        let request = GenerateKeywordIdeasRequest {
            language: "languageConstants/1000".to_string(),
            geo_target_constants: vec![],
            include_adult_keywords: false,
            keyword_plan_network: "GOOGLE_SEARCH_AND_PARTNERS",
            keyword_seed: KeywordSeed {
                keywords: vec!["seo"],
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["language"], "languageConstants/1000");
        assert!(json.get("geoTargetConstants").is_none());
        assert_eq!(json["keywordPlanNetwork"], "GOOGLE_SEARCH_AND_PARTNERS");
        assert_eq!(json["keywordSeed"]["keywords"][0], "seo");
    }
}
