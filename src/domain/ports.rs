use crate::domain::model::RawMetric;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of keyword idea rows. `location_id = None` means no geo filter.
#[async_trait]
pub trait KeywordIdeaSource: Send + Sync {
    async fn generate_keyword_ideas(
        &self,
        keyword: &str,
        language_id: &str,
        location_id: Option<&str>,
    ) -> Result<Vec<RawMetric>>;
}
