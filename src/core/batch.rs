use crate::core::service::KeywordService;
use crate::domain::model::KeywordQuery;
use crate::output::CsvExporter;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// One keyword per line; blank lines and `#` comments are skipped.
pub fn parse_keywords(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_keywords<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_keywords(&content))
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub language_id: String,
    pub location_id: String,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub not_found: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

pub struct BatchRunner {
    service: KeywordService,
    options: BatchOptions,
}

impl BatchRunner {
    pub fn new(service: KeywordService, options: BatchOptions) -> Self {
        Self { service, options }
    }

    /// Processes keywords in order. A failure on one keyword is logged and
    /// recorded in the summary; the rest still run.
    pub async fn run<W: Write>(
        &self,
        keywords: &[String],
        exporter: &mut CsvExporter<W>,
    ) -> Result<BatchSummary> {
        exporter.write_header()?;

        let mut summary = BatchSummary {
            total: keywords.len(),
            ..Default::default()
        };

        for (i, keyword) in keywords.iter().enumerate() {
            tracing::info!("Processing keyword [{}/{}]: {}", i + 1, keywords.len(), keyword);

            let query = KeywordQuery::new(
                keyword.as_str(),
                self.options.language_id.as_str(),
                self.options.location_id.as_str(),
            );

            match self.service.lookup(&query).await {
                Ok(Some(record)) => match exporter.write_record(&record) {
                    Ok(()) => summary.succeeded += 1,
                    Err(e) => {
                        tracing::warn!("Failed to write CSV row for '{}': {}", keyword, e);
                        summary.failed.push((keyword.clone(), e.to_string()));
                    }
                },
                Ok(None) => {
                    tracing::warn!("No keyword data found: {}", keyword);
                    summary.not_found.push(keyword.clone());
                }
                Err(e) => {
                    tracing::error!(
                        "❌ Failed to process '{}': {} (Category: {:?})",
                        keyword,
                        e,
                        e.category()
                    );
                    summary.failed.push((keyword.clone(), e.user_friendly_message()));
                }
            }

            if i + 1 < keywords.len() && !self.options.delay.is_zero() {
                tokio::time::sleep(self.options.delay).await;
            }
        }

        tracing::info!(
            "Batch finished. Succeeded: {}/{} (not found: {}, failed: {})",
            summary.succeeded,
            summary.total,
            summary.not_found.len(),
            summary.failed.len()
        );

        Ok(summary)
    }
}
