use crate::core::matcher::match_result;
use crate::core::normalizer::normalize;
use crate::core::scoring::{classify_intent, keyword_difficulty};
use crate::domain::model::{KeywordRecord, RawMetric};

/// Builds the record for `target` from the domestic rows and, when the
/// global query succeeded, the global rows.
///
/// Returns `None` when the domestic rows are empty. A missing global
/// result never fails the computation; the domestic volume is reused and
/// the record says so through `global_volume_source`.
pub fn compute_keyword_record(
    domestic: &[RawMetric],
    global: Option<&[RawMetric]>,
    target: &str,
) -> Option<KeywordRecord> {
    let domestic_row = match match_result(domestic, target) {
        Some(row) => row,
        None => {
            tracing::info!("No keyword data returned for '{}'", target);
            return None;
        }
    };

    let global_row = global.and_then(|rows| match_result(rows, target));
    let metrics = normalize(domestic_row, global_row);

    let difficulty = keyword_difficulty(
        metrics.competition_index,
        metrics.volume_domestic,
        metrics.cpc,
    );
    let intent = classify_intent(&metrics.keyword);

    Some(KeywordRecord {
        keyword: metrics.keyword,
        volume_domestic: metrics.volume_domestic,
        volume_global: metrics.volume_global,
        global_volume_source: metrics.global_volume_source,
        competition: metrics.competition,
        competition_index: metrics.competition_index,
        cpc: metrics.cpc,
        intent,
        difficulty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CompetitionLevel, GlobalVolumeSource, IntentType};

    fn row(text: &str, volume: u64, index: u32, cpc_micros: Option<i64>) -> RawMetric {
        RawMetric {
            text: text.to_string(),
            avg_monthly_searches: Some(volume),
            competition: CompetitionLevel::Medium,
            competition_index: Some(index),
            avg_cpc_micros: cpc_micros,
        }
    }

    #[test]
    fn test_full_record_from_both_regions() {
        let domestic = vec![
            row("running shoes women", 500, 90, Some(3_000_000)),
            row("best running shoes", 1_000, 50, Some(2_500_000)),
        ];
        let global = vec![row("best running shoes", 12_000, 60, Some(1_000_000))];

        let record =
            compute_keyword_record(&domestic, Some(global.as_slice()), "Best Running Shoes").unwrap();

        assert_eq!(record.keyword, "best running shoes");
        assert_eq!(record.volume_domestic, 1_000);
        assert_eq!(record.volume_global, 12_000);
        assert_eq!(record.global_volume_source, GlobalVolumeSource::Global);
        assert_eq!(record.competition_index, 50);
        assert_eq!(record.cpc, Some(2.5));
        assert_eq!(record.intent, IntentType::Commercial);
        assert_eq!(record.difficulty, 42.0);
    }

    #[test]
    fn test_empty_domestic_is_absent() {
        let global = vec![row("seo", 10, 10, None)];
        assert!(compute_keyword_record(&[], Some(global.as_slice()), "seo").is_none());
        assert!(compute_keyword_record(&[], None, "seo").is_none());
    }

    #[test]
    fn test_global_failure_reuses_domestic_volume() {
        let domestic = vec![row("seo audit", 2_400, 30, None)];

        let record = compute_keyword_record(&domestic, None, "seo audit").unwrap();
        assert_eq!(record.volume_global, record.volume_domestic);
        assert!(record.is_global_fallback());
        assert_eq!(record.cpc, None);
    }

    #[test]
    fn test_empty_global_rows_reuse_domestic_volume() {
        let domestic = vec![row("seo audit", 2_400, 30, None)];

        let record = compute_keyword_record(&domestic, Some(&[][..]), "seo audit").unwrap();
        assert_eq!(record.volume_global, 2_400);
        assert!(record.is_global_fallback());
    }
}
