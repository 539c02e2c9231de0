use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Google Ads API error ({status}): {message}")]
    GoogleAdsError {
        status: u16,
        message: String,
        details: Vec<String>,
    },

    #[error("Authentication failed: {message}")]
    AuthError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Authentication,
    Upstream,
    Configuration,
    Data,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::ApiError(_) => ErrorCategory::Network,
            PlannerError::AuthError { .. } => ErrorCategory::Authentication,
            PlannerError::GoogleAdsError { status, .. } if *status == 401 || *status == 403 => {
                ErrorCategory::Authentication
            }
            PlannerError::GoogleAdsError { .. } => ErrorCategory::Upstream,
            PlannerError::ConfigError { .. }
            | PlannerError::MissingConfigError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PlannerError::CsvError(_)
            | PlannerError::SerializationError(_)
            | PlannerError::ValidationError { .. } => ErrorCategory::Data,
            PlannerError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路與配額問題通常重試即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Upstream => match self {
                PlannerError::GoogleAdsError { status, .. } if *status == 429 || *status >= 500 => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Authentication
            | ErrorCategory::Configuration
            | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 適合直接顯示給終端使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::ApiError(e) if e.is_timeout() => {
                "The Google Ads API did not respond in time".to_string()
            }
            PlannerError::ApiError(_) => "Could not reach the Google Ads API".to_string(),
            PlannerError::GoogleAdsError { message, .. } => {
                format!("Google Ads API rejected the request: {}", message)
            }
            PlannerError::AuthError { .. } => {
                "Could not obtain an access token for the Google Ads API".to_string()
            }
            PlannerError::MissingConfigError { field } => {
                format!("Configuration value '{}' is not set", field)
            }
            PlannerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PlannerError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check the network connection and try again later".to_string()
            }
            ErrorCategory::Authentication => {
                "Verify client_id, client_secret and refresh_token; run `refresh-token` to obtain a new refresh token".to_string()
            }
            ErrorCategory::Upstream => match self {
                PlannerError::GoogleAdsError { status: 429, .. } => {
                    "Quota exhausted; increase the batch delay or wait before retrying".to_string()
                }
                _ => "Check the developer token access level and the customer ID (run `list-customers`)".to_string(),
            },
            ErrorCategory::Configuration => {
                "Review keyword-planner.toml (see keyword-planner.example.toml)".to_string()
            }
            ErrorCategory::Data => match self {
                PlannerError::ValidationError { .. } => "Provide a non-empty keyword".to_string(),
                _ => "Check the input data format".to_string(),
            },
            ErrorCategory::Io => "Check that the file exists and is writable".to_string(),
        }
    }

    /// 命令列工具的結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_ads_auth_status_is_authentication() {
        let err = PlannerError::GoogleAdsError {
            status: 401,
            message: "Request had invalid authentication credentials".to_string(),
            details: vec![],
        };
        assert_eq!(err.category(), ErrorCategory::Authentication);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_quota_error_is_retryable() {
        let err = PlannerError::GoogleAdsError {
            status: 429,
            message: "Resource has been exhausted".to_string(),
            details: vec![],
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("delay"));
    }

    #[test]
    fn test_empty_keyword_is_data_error() {
        let err = PlannerError::ValidationError {
            message: "Please enter a keyword".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.user_friendly_message(), "Please enter a keyword");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = PlannerError::MissingConfigError {
            field: "google_ads.developer_token".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("developer_token"));
    }
}
