use anyhow::Context;
use clap::Parser;
use keyword_planner::adapters::oauth::LOOPBACK_REDIRECT_URI;
use keyword_planner::adapters::OAuthClient;
use keyword_planner::config::DEFAULT_CONFIG_PATH;
use keyword_planner::utils::logger::{self, Verbosity};
use keyword_planner::utils::validation;
use keyword_planner::AppConfig;
use std::io::Write;

#[derive(Parser)]
#[command(name = "refresh-token")]
#[command(about = "Obtain a Google Ads OAuth refresh token")]
struct Args {
    /// Path to TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Redirect URI registered for the OAuth client
    #[arg(long, default_value = LOOPBACK_REDIRECT_URI)]
    redirect_uri: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(Verbosity::from_flags(args.verbose, false));

    let config = AppConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;
    let ads = &config.google_ads;

    // 只需要 client_id 與 client_secret
    validation::validate_credential("google_ads.client_id", &ads.client_id)?;
    validation::validate_credential("google_ads.client_secret", &ads.client_secret)?;

    let oauth = OAuthClient::new(
        reqwest::Client::builder().timeout(ads.timeout()).build()?,
        ads.token_endpoint.clone(),
        ads.client_id.clone(),
        ads.client_secret.clone(),
    );

    println!("请在浏览器中打开以下链接并授权:\n");
    println!("{}\n", oauth.authorization_url(&args.redirect_uri)?);
    println!("授权后浏览器会跳转到 {}，复制地址栏中 code= 后面的值", args.redirect_uri);
    print!("\n请输入授权码: ");
    std::io::stdout().flush()?;

    let mut code = String::new();
    std::io::stdin()
        .read_line(&mut code)
        .context("Failed to read authorization code")?;
    let code = code.trim();
    if code.is_empty() {
        anyhow::bail!("No authorization code entered");
    }

    let refresh_token = oauth.exchange_code(code, &args.redirect_uri).await?;

    println!("\n✅ Refresh token:\n\n{}\n", refresh_token);
    println!("将其填入配置文件的 google_ads.refresh_token");

    Ok(())
}
