use anyhow::Context;
use clap::Parser;
use keyword_planner::config::DEFAULT_CONFIG_PATH;
use keyword_planner::utils::logger::{self, Verbosity};
use keyword_planner::{AppConfig, GoogleAdsClient};

#[derive(Parser)]
#[command(name = "list-customers")]
#[command(about = "List the Google Ads customer accounts the credentials can access")]
struct Args {
    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// "1234567890" -> "123-456-7890"
fn dashed(id: &str) -> String {
    if id.len() == 10 && id.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}-{}", &id[..3], &id[3..6], &id[6..])
    } else {
        id.to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(Verbosity::from_flags(args.verbose, false));

    let config = AppConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;
    // 這裡還不需要 customer ID
    config.validate_credentials()?;

    let client = GoogleAdsClient::from_config(&config)?;
    let customers = client.list_accessible_customers().await?;

    if customers.is_empty() {
        println!("没有可访问的客户账号");
        return Ok(());
    }

    println!("可访问的客户账号 ({}):", customers.len());
    for id in &customers {
        println!("  {}  ({})", dashed(id), id);
    }
    println!("\n将其中一个 ID 填入配置文件的 google_ads.login_customer_id");

    Ok(())
}
