#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{BatchArgs, CliConfig};
pub use toml_config::{AppConfig, DEFAULT_CONFIG_PATH};
