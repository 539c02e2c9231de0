use crate::config::toml_config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::domain::model::KeywordQuery;
use crate::output::Locale;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "keyword-planner")]
#[command(about = "Google Ads keyword analysis tool - command line")]
pub struct CliConfig {
    /// Keyword to analyze; starts interactive mode when omitted
    pub keyword: Option<String>,

    /// Language criterion ID (default from config, 1000 = English)
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Location criterion ID (default from config, 2840 = United States)
    #[arg(short = 'c', long)]
    pub country: Option<String>,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output (more detailed than --verbose)
    #[arg(short, long)]
    pub debug: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Label language for text output
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,
}

impl CliConfig {
    pub fn query_for(&self, keyword: &str, config: &AppConfig) -> KeywordQuery {
        KeywordQuery::new(
            keyword,
            self.language
                .clone()
                .unwrap_or_else(|| config.defaults.language_id.clone()),
            self.country
                .clone()
                .unwrap_or_else(|| config.defaults.location_id.clone()),
        )
    }

    pub fn locale(&self, config: &AppConfig) -> Locale {
        self.locale.unwrap_or(config.output.locale)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "batch-keywords")]
#[command(about = "Google Ads keyword analysis tool - batch CSV export")]
pub struct BatchArgs {
    /// Input file with one keyword per line
    pub input_file: String,

    /// Output CSV path (default from config: keywords_results.csv)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Language criterion ID
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Location criterion ID
    #[arg(short = 'c', long)]
    pub country: Option<String>,

    /// Delay in seconds between requests
    #[arg(short, long)]
    pub delay: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Label language for the CSV
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,
}

impl BatchArgs {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(language) = &self.language {
            config.defaults.language_id = language.clone();
        }
        if let Some(country) = &self.country {
            config.defaults.location_id = country.clone();
        }
        if let Some(delay) = self.delay {
            config.batch.delay_seconds = delay;
        }
        if let Some(output) = &self.output {
            config.batch.output = output.clone();
        }
        if let Some(locale) = self.locale {
            config.output.locale = locale;
        }
    }
}
