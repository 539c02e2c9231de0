pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;
#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "cli")]
pub use config::{BatchArgs, CliConfig};

pub use adapters::GoogleAdsClient;
pub use config::AppConfig;
pub use core::{batch::BatchRunner, compute_keyword_record, service::KeywordService};
pub use domain::model::{KeywordQuery, KeywordRecord, RawMetric};
pub use utils::error::{PlannerError, Result};
