use clap::Parser;
use keyword_planner::core::batch::{read_keywords, BatchOptions, BatchSummary};
use keyword_planner::output::CsvExporter;
use keyword_planner::utils::{logger, validation::Validate};
use keyword_planner::{AppConfig, BatchArgs, BatchRunner, GoogleAdsClient, KeywordService};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = BatchArgs::parse();

    // 初始化日誌
    logger::init_batch_logger(args.verbose);

    tracing::info!("🚀 Starting batch keyword export");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match AppConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 應用命令列覆蓋設定
    args.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if !Path::new(&args.input_file).exists() {
        eprintln!("❌ 错误: 输入文件 '{}' 不存在", args.input_file);
        std::process::exit(1);
    }

    let keywords = match read_keywords(&args.input_file) {
        Ok(keywords) if keywords.is_empty() => {
            eprintln!("❌ 错误: 输入文件中没有关键词");
            std::process::exit(1);
        }
        Ok(keywords) => keywords,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!("✅ Loaded {} keywords from {}", keywords.len(), args.input_file);
    println!("共读取 {} 个关键词，结果将写入 {}", keywords.len(), config.batch.output);

    let client = match GoogleAdsClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let mut exporter = match CsvExporter::create(&config.batch.output, config.output.locale) {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let runner = BatchRunner::new(
        KeywordService::new(Arc::new(client)),
        BatchOptions {
            language_id: config.defaults.language_id.clone(),
            location_id: config.defaults.location_id.clone(),
            delay: config.batch_delay(),
        },
    );

    match runner.run(&keywords, &mut exporter).await {
        Ok(summary) => {
            print_summary(&summary, &config.batch.output);
            if summary.succeeded == 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("❌ Batch export failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn print_summary(summary: &BatchSummary, output: &str) {
    println!("\n=== 批量处理完成 ===");
    println!("总数: {}", summary.total);
    println!("成功: {}", summary.succeeded);

    if !summary.not_found.is_empty() {
        println!("无数据: {}", summary.not_found.len());
        for keyword in &summary.not_found {
            println!("  - {}", keyword);
        }
    }

    if !summary.failed.is_empty() {
        println!("失败: {}", summary.failed.len());
        for (keyword, reason) in &summary.failed {
            println!("  - {}: {}", keyword, reason);
        }
    }

    if summary.succeeded > 0 {
        println!("结果已保存到: {}", output);
    }
}
