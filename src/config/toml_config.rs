use crate::domain::model::{DEFAULT_LANGUAGE_ID, DEFAULT_LOCATION_ID};
use crate::output::Locale;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "keyword-planner.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub google_ads: GoogleAdsConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAdsConfig {
    #[serde(default)]
    pub developer_token: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub refresh_token: String,
    pub login_customer_id: Option<String>,
    /// 要查詢的帳戶；未設定時沿用 login_customer_id
    pub customer_id: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_token_endpoint")]
    pub token_endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_language_id")]
    pub language_id: String,
    #[serde(default = "default_location_id")]
    pub location_id: String,
    #[serde(default)]
    pub include_adult_keywords: bool,
    #[serde(default = "default_network")]
    pub network: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: f64,
    #[serde(default = "default_batch_output")]
    pub output: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub locale: Locale,
}

fn default_api_version() -> String {
    "v17".to_string()
}

fn default_endpoint() -> String {
    "https://googleads.googleapis.com".to_string()
}

fn default_token_endpoint() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_language_id() -> String {
    DEFAULT_LANGUAGE_ID.to_string()
}

fn default_location_id() -> String {
    DEFAULT_LOCATION_ID.to_string()
}

fn default_network() -> String {
    "GOOGLE_SEARCH_AND_PARTNERS".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_delay_seconds() -> f64 {
    1.0
}

fn default_batch_output() -> String {
    "keywords_results.csv".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language_id: default_language_id(),
            location_id: default_location_id(),
            include_adult_keywords: false,
            network: default_network(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_seconds: default_delay_seconds(),
            output: default_batch_output(),
        }
    }
}

const VALID_NETWORKS: [&str; 2] = ["GOOGLE_SEARCH", "GOOGLE_SEARCH_AND_PARTNERS"];

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PlannerError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOOGLE_ADS_DEVELOPER_TOKEN})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 只驗證 OAuth 與 developer token，供不需要 customer ID 的工具使用
    pub fn validate_credentials(&self) -> Result<()> {
        let ads = &self.google_ads;
        validation::validate_credential("google_ads.developer_token", &ads.developer_token)?;
        validation::validate_credential("google_ads.client_id", &ads.client_id)?;
        validation::validate_credential("google_ads.client_secret", &ads.client_secret)?;
        validation::validate_credential("google_ads.refresh_token", &ads.refresh_token)?;
        validation::validate_url("google_ads.endpoint", &ads.endpoint)?;
        validation::validate_url("google_ads.token_endpoint", &ads.token_endpoint)?;
        validation::validate_non_empty_string("google_ads.api_version", &ads.api_version)?;

        if let Some(login) = ads.login_customer_id.as_deref().filter(|s| !s.trim().is_empty()) {
            validation::validate_customer_id("google_ads.login_customer_id", login)?;
        }
        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.validate_credentials()?;
        self.google_ads.customer_id()?;

        validation::validate_numeric_id("defaults.language_id", &self.defaults.language_id)?;
        validation::validate_numeric_id("defaults.location_id", &self.defaults.location_id)?;

        if !VALID_NETWORKS.contains(&self.defaults.network.as_str()) {
            return Err(PlannerError::InvalidConfigValueError {
                field: "defaults.network".to_string(),
                value: self.defaults.network.clone(),
                reason: format!("Valid networks: {}", VALID_NETWORKS.join(", ")),
            });
        }

        validation::validate_range("batch.delay_seconds", self.batch.delay_seconds, 0.0, 3600.0)?;
        validation::validate_path("batch.output", &self.batch.output)?;
        validation::validate_non_empty_string("server.host", &self.server.host)?;

        Ok(())
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_secs_f64(self.batch.delay_seconds.max(0.0))
    }
}

impl GoogleAdsConfig {
    /// The account keyword ideas are requested for, without dashes.
    pub fn customer_id(&self) -> Result<String> {
        let raw = self
            .customer_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                self.login_customer_id
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
            })
            .ok_or_else(|| PlannerError::MissingConfigError {
                field: "google_ads.customer_id (or login_customer_id)".to_string(),
            })?;

        validation::validate_customer_id("google_ads.customer_id", raw)
    }

    pub fn login_customer_id(&self) -> Option<String> {
        self.login_customer_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(validation::normalize_customer_id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(30))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
