use crate::utils::error::{PlannerError, Result};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const ADWORDS_SCOPE: &str = "https://www.googleapis.com/auth/adwords";
pub const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/auth";
/// Loopback redirect for installed apps; the code is copied from the
/// browser's address bar.
pub const LOOPBACK_REDIRECT_URI: &str = "http://localhost";

/// Tokens are refreshed this long before Google says they expire.
const EXPIRY_MARGIN_SECONDS: i64 = 60;

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECONDS) < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OAuthClient {
    http: Client,
    token_endpoint: String,
    client_id: String,
    client_secret: String,
}

impl OAuthClient {
    pub fn new(
        http: Client,
        token_endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_endpoint: token_endpoint.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn authorization_url(&self, redirect_uri: &str) -> Result<String> {
        let url = Url::parse_with_params(
            AUTHORIZATION_ENDPOINT,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", redirect_uri),
                ("response_type", "code"),
                ("scope", ADWORDS_SCOPE),
                ("access_type", "offline"),
                ("prompt", "consent"),
            ],
        )
        .map_err(|e| PlannerError::ConfigError {
            message: format!("Cannot build authorization URL: {}", e),
        })?;
        Ok(url.to_string())
    }

    /// Exchanges an authorization code for a long-lived refresh token.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<String> {
        let response = self
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code.trim()),
                ("redirect_uri", redirect_uri),
            ])
            .await?;

        response.refresh_token.ok_or_else(|| PlannerError::AuthError {
            message: "Token response did not include a refresh_token".to_string(),
        })
    }

    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<AccessToken> {
        tracing::debug!("Refreshing OAuth access token");
        let response = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .await?;

        let token = response.access_token.ok_or_else(|| PlannerError::AuthError {
            message: "Token response did not include an access_token".to_string(),
        })?;
        let expires_in = response.expires_in.unwrap_or(3600);

        Ok(AccessToken {
            token,
            expires_at: Utc::now() + Duration::seconds(expires_in),
        })
    }

    async fn request_token(&self, grant: &[(&str, &str)]) -> Result<TokenResponse> {
        let mut form: Vec<(&str, &str)> = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        form.extend_from_slice(grant);

        let response = self
            .http
            .post(&self.token_endpoint)
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        let body: TokenResponse = response.json().await.map_err(|e| PlannerError::AuthError {
            message: format!("Unreadable token response ({}): {}", status, e),
        })?;

        if !status.is_success() || body.error.is_some() {
            let message = match (&body.error, &body.error_description) {
                (Some(code), Some(description)) => format!("{}: {}", code, description),
                (Some(code), None) => code.clone(),
                _ => format!("token endpoint returned {}", status),
            };
            tracing::error!("OAuth token request failed: {}", message);
            return Err(PlannerError::AuthError { message });
        }

        Ok(body)
    }
}
