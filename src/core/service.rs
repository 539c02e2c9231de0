use crate::core::record::compute_keyword_record;
use crate::domain::model::{KeywordQuery, KeywordRecord};
use crate::domain::ports::KeywordIdeaSource;
use crate::utils::error::Result;
use std::sync::Arc;

/// Runs the domestic and global keyword idea requests for one keyword and
/// turns the rows into a [`KeywordRecord`].
#[derive(Clone)]
pub struct KeywordService {
    source: Arc<dyn KeywordIdeaSource>,
}

impl KeywordService {
    pub fn new(source: Arc<dyn KeywordIdeaSource>) -> Self {
        Self { source }
    }

    /// A failed domestic request is returned as an error. A failed global
    /// request only downgrades `volume_global` to the domestic value.
    pub async fn lookup(&self, query: &KeywordQuery) -> Result<Option<KeywordRecord>> {
        tracing::info!(
            "🔎 Fetching keyword data: '{}' (language={}, location={})",
            query.keyword,
            query.language_id,
            query.location_id
        );

        let domestic = self
            .source
            .generate_keyword_ideas(&query.keyword, &query.language_id, Some(&query.location_id))
            .await?;
        tracing::debug!("Domestic request returned {} rows", domestic.len());

        if domestic.is_empty() {
            tracing::warn!("No keyword data found for '{}'", query.keyword);
            return Ok(None);
        }

        let global = match self
            .source
            .generate_keyword_ideas(&query.keyword, &query.language_id, None)
            .await
        {
            Ok(rows) => {
                tracing::debug!("Global request returned {} rows", rows.len());
                Some(rows)
            }
            Err(e) => {
                tracing::warn!(
                    "Global request for '{}' failed, falling back to domestic volume: {}",
                    query.keyword,
                    e
                );
                None
            }
        };

        let record = compute_keyword_record(&domestic, global.as_deref(), &query.keyword);
        if let Some(record) = &record {
            tracing::info!(
                "✅ '{}': volume={}, global={}, kd={}, type={}",
                record.keyword,
                record.volume_domestic,
                record.volume_global,
                record.difficulty,
                record.intent.code()
            );
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CompetitionLevel, RawMetric};
    use crate::utils::error::PlannerError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSource {
        domestic: Result<Vec<RawMetric>>,
        global: Result<Vec<RawMetric>>,
        calls: Mutex<Vec<Option<String>>>,
    }

    impl MockSource {
        fn new(domestic: Result<Vec<RawMetric>>, global: Result<Vec<RawMetric>>) -> Self {
            Self {
                domestic,
                global,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    fn clone_result(result: &Result<Vec<RawMetric>>) -> Result<Vec<RawMetric>> {
        match result {
            Ok(rows) => Ok(rows.clone()),
            Err(e) => Err(PlannerError::GoogleAdsError {
                status: 500,
                message: e.to_string(),
                details: vec![],
            }),
        }
    }

    #[async_trait]
    impl KeywordIdeaSource for MockSource {
        async fn generate_keyword_ideas(
            &self,
            _keyword: &str,
            _language_id: &str,
            location_id: Option<&str>,
        ) -> Result<Vec<RawMetric>> {
            self.calls
                .lock()
                .unwrap()
                .push(location_id.map(str::to_string));
            match location_id {
                Some(_) => clone_result(&self.domestic),
                None => clone_result(&self.global),
            }
        }
    }

    fn row(text: &str, volume: u64) -> RawMetric {
        RawMetric {
            text: text.to_string(),
            avg_monthly_searches: Some(volume),
            competition: CompetitionLevel::Low,
            competition_index: Some(20),
            avg_cpc_micros: Some(500_000),
        }
    }

    fn upstream_error() -> PlannerError {
        PlannerError::GoogleAdsError {
            status: 503,
            message: "unavailable".to_string(),
            details: vec![],
        }
    }

    #[tokio::test]
    async fn test_lookup_queries_domestic_then_global() {
        let source = Arc::new(MockSource::new(
            Ok(vec![row("coffee grinder", 5_000)]),
            Ok(vec![row("coffee grinder", 40_000)]),
        ));
        let service = KeywordService::new(source.clone());

        let record = service
            .lookup(&KeywordQuery::new("coffee grinder", "1000", "2840"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.volume_domestic, 5_000);
        assert_eq!(record.volume_global, 40_000);
        assert!(!record.is_global_fallback());
        assert_eq!(
            *source.calls.lock().unwrap(),
            vec![Some("2840".to_string()), None]
        );
    }

    #[tokio::test]
    async fn test_global_failure_is_not_fatal() {
        let source = Arc::new(MockSource::new(
            Ok(vec![row("coffee grinder", 5_000)]),
            Err(upstream_error()),
        ));
        let service = KeywordService::new(source);

        let record = service
            .lookup(&KeywordQuery::new("coffee grinder", "1000", "2840"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.volume_global, 5_000);
        assert!(record.is_global_fallback());
    }

    #[tokio::test]
    async fn test_domestic_failure_propagates() {
        let source = Arc::new(MockSource::new(Err(upstream_error()), Ok(vec![])));
        let service = KeywordService::new(source.clone());

        let result = service
            .lookup(&KeywordQuery::new("coffee grinder", "1000", "2840"))
            .await;

        assert!(result.is_err());
        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_domestic_skips_global_request() {
        let source = Arc::new(MockSource::new(Ok(vec![]), Ok(vec![row("x", 1)])));
        let service = KeywordService::new(source.clone());

        let result = service
            .lookup(&KeywordQuery::new("nothing here", "1000", "2840"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }
}
