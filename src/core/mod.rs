pub mod batch;
pub mod matcher;
pub mod normalizer;
pub mod record;
pub mod scoring;
pub mod service;

pub use crate::domain::model::{KeywordQuery, KeywordRecord, RawMetric};
pub use crate::domain::ports::KeywordIdeaSource;
pub use crate::utils::error::Result;
pub use record::compute_keyword_record;
