use crate::domain::model::{CompetitionLevel, GlobalVolumeSource, RawMetric};

const MICROS_PER_UNIT: f64 = 1_000_000.0;
const MAX_COMPETITION_INDEX: u32 = 100;

/// Metrics of the matched row with neutral values substituted for
/// anything the API left out.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMetrics {
    pub keyword: String,
    pub volume_domestic: u64,
    pub volume_global: u64,
    pub global_volume_source: GlobalVolumeSource,
    pub competition: CompetitionLevel,
    pub competition_index: u32,
    pub cpc: Option<f64>,
}

/// `None` for missing or non-positive values so that "no data" is never
/// reported as a zero cost.
pub fn cpc_from_micros(micros: Option<i64>) -> Option<f64> {
    match micros {
        Some(value) if value > 0 => Some(value as f64 / MICROS_PER_UNIT),
        _ => None,
    }
}

pub fn normalize(domestic: &RawMetric, global: Option<&RawMetric>) -> NormalizedMetrics {
    let volume_domestic = domestic.avg_monthly_searches.unwrap_or(0);

    let (volume_global, global_volume_source) = match global {
        Some(row) => match row.avg_monthly_searches {
            Some(volume) => (volume, GlobalVolumeSource::Global),
            None => {
                tracing::warn!(
                    "Global result for '{}' has no search volume, using domestic volume",
                    row.text
                );
                (volume_domestic, GlobalVolumeSource::DomesticFallback)
            }
        },
        None => {
            tracing::warn!(
                "No global data for '{}', using domestic volume ({}) as global volume",
                domestic.text,
                volume_domestic
            );
            (volume_domestic, GlobalVolumeSource::DomesticFallback)
        }
    };

    let competition_index = match domestic.competition_index {
        Some(index) if index > MAX_COMPETITION_INDEX => {
            tracing::warn!(
                "Competition index {} for '{}' is out of range, clamping to {}",
                index,
                domestic.text,
                MAX_COMPETITION_INDEX
            );
            MAX_COMPETITION_INDEX
        }
        Some(index) => index,
        None => 0,
    };

    NormalizedMetrics {
        keyword: domestic.text.clone(),
        volume_domestic,
        volume_global,
        global_volume_source,
        competition: domestic.competition,
        competition_index,
        cpc: cpc_from_micros(domestic.avg_cpc_micros),
    }
}
