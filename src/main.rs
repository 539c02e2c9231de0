use clap::Parser;
use keyword_planner::output::text::{format_json, format_report};
use keyword_planner::output::{labels, Locale};
use keyword_planner::utils::logger::{self, Verbosity};
use keyword_planner::utils::validation::{self, Validate};
use keyword_planner::{AppConfig, CliConfig, GoogleAdsClient, KeywordService, PlannerError};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(Verbosity::from_flags(cli.verbose, cli.debug));
    tracing::debug!("CLI config: {:?}", cli);

    let code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(
                "❌ Keyword analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(cli: &CliConfig) -> Result<i32, PlannerError> {
    let config = AppConfig::from_file(&cli.config)?;
    config.validate()?;

    let client = GoogleAdsClient::from_config(&config)?;
    let service = KeywordService::new(Arc::new(client));
    let locale = cli.locale(&config);

    match &cli.keyword {
        Some(keyword) => single_keyword(cli, &config, &service, keyword, locale).await,
        None => interactive_mode(cli, &config, &service, locale).await,
    }
}

async fn single_keyword(
    cli: &CliConfig,
    config: &AppConfig,
    service: &KeywordService,
    keyword: &str,
    locale: Locale,
) -> Result<i32, PlannerError> {
    let keyword = validation::validate_keyword(keyword)?;
    let query = cli.query_for(keyword, config);

    match service.lookup(&query).await? {
        Some(record) if cli.json => {
            println!("{}", format_json(&record)?);
            Ok(0)
        }
        Some(record) => {
            println!("{}", format_report(&record, locale));
            Ok(0)
        }
        None => {
            println!("{}", labels::not_found(locale));
            Ok(1)
        }
    }
}

async fn interactive_mode(
    cli: &CliConfig,
    config: &AppConfig,
    service: &KeywordService,
    locale: Locale,
) -> Result<i32, PlannerError> {
    println!("\n=== Google Ads 关键词分析工具 - 交互模式 ===");
    println!("输入关键词进行分析，输入 'q' 或 'exit' 退出\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n请输入关键词 (q 退出): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let keyword = line.trim();

        if matches!(keyword.to_lowercase().as_str(), "q" | "exit" | "quit") {
            println!("再见!");
            break;
        }
        if keyword.is_empty() {
            continue;
        }

        println!("\n正在分析关键词: {}...", keyword);
        let query = cli.query_for(keyword, config);

        // 單一關鍵字失敗不結束互動模式
        match service.lookup(&query).await {
            Ok(Some(record)) if cli.json => println!("{}", format_json(&record)?),
            Ok(Some(record)) => println!("{}", format_report(&record, locale)),
            Ok(None) => println!("{}", labels::not_found(locale)),
            Err(e) => println!("分析关键词时出错: {}", e.user_friendly_message()),
        }
    }

    Ok(0)
}
