use crate::domain::model::RawMetric;

/// Picks the row whose text equals `target` ignoring case, otherwise the
/// first row. `None` only when `metrics` is empty.
pub fn match_result<'a>(metrics: &'a [RawMetric], target: &str) -> Option<&'a RawMetric> {
    let target = target.trim().to_lowercase();

    if let Some(exact) = metrics
        .iter()
        .find(|metric| metric.text.trim().to_lowercase() == target)
    {
        tracing::debug!("Exact match found: {}", exact.text);
        return Some(exact);
    }

    let first = metrics.first()?;
    tracing::debug!(
        "No exact match for '{}', falling back to first result: {}",
        target,
        first.text
    );
    Some(first)
}
