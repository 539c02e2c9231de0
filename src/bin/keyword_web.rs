use anyhow::Context;
use clap::Parser;
use keyword_planner::config::DEFAULT_CONFIG_PATH;
use keyword_planner::utils::{logger, validation::Validate};
use keyword_planner::web::{self, AppState};
use keyword_planner::{AppConfig, GoogleAdsClient, KeywordService};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "keyword-web")]
#[command(about = "Google Ads keyword analysis tool - web server")]
struct Args {
    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the bind host from config
    #[arg(long)]
    host: Option<String>,

    /// Override the port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_server_logger(args.json_logs);

    tracing::info!("🚀 Keyword web server is initializing...");

    let mut config = AppConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    config.validate().context("Configuration validation failed")?;

    // 整個程序共用同一個 API client
    let client = GoogleAdsClient::from_config(&config)?;
    let state = Arc::new(AppState {
        service: KeywordService::new(Arc::new(client)),
        language_id: config.defaults.language_id.clone(),
        location_id: config.defaults.location_id.clone(),
    });

    let app = web::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {}", addr))?;

    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
