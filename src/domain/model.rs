use serde::{Deserialize, Serialize};

/// Google Ads 的預設條件：英語 (1000)、美國 (2840)
pub const DEFAULT_LANGUAGE_ID: &str = "1000";
pub const DEFAULT_LOCATION_ID: &str = "2840";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordQuery {
    pub keyword: String,
    pub language_id: String,
    pub location_id: String,
}

impl KeywordQuery {
    pub fn new(
        keyword: impl Into<String>,
        language_id: impl Into<String>,
        location_id: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            language_id: language_id.into(),
            location_id: location_id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitionLevel {
    #[default]
    Unspecified,
    Unknown,
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    /// Unrecognised labels map to `Unknown` rather than failing the row.
    pub fn from_api_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "" | "UNSPECIFIED" => CompetitionLevel::Unspecified,
            "LOW" => CompetitionLevel::Low,
            "MEDIUM" => CompetitionLevel::Medium,
            "HIGH" => CompetitionLevel::High,
            _ => CompetitionLevel::Unknown,
        }
    }

    pub fn as_api_label(&self) -> &'static str {
        match self {
            CompetitionLevel::Unspecified => "UNSPECIFIED",
            CompetitionLevel::Unknown => "UNKNOWN",
            CompetitionLevel::Low => "LOW",
            CompetitionLevel::Medium => "MEDIUM",
            CompetitionLevel::High => "HIGH",
        }
    }
}

/// One keyword idea row as returned by the ads API. Numeric fields are
/// optional because the API omits them when it has no data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMetric {
    pub text: String,
    pub avg_monthly_searches: Option<u64>,
    pub competition: CompetitionLevel,
    pub competition_index: Option<u32>,
    pub avg_cpc_micros: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentType {
    #[serde(rename = "I")]
    Informational,
    #[serde(rename = "C")]
    Commercial,
    #[serde(rename = "T")]
    Transactional,
}

impl IntentType {
    pub fn code(&self) -> &'static str {
        match self {
            IntentType::Informational => "I",
            IntentType::Commercial => "C",
            IntentType::Transactional => "T",
        }
    }
}

/// Where `volume_global` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalVolumeSource {
    Global,
    DomesticFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub volume_domestic: u64,
    pub volume_global: u64,
    pub global_volume_source: GlobalVolumeSource,
    pub competition: CompetitionLevel,
    pub competition_index: u32,
    pub cpc: Option<f64>,
    #[serde(rename = "type")]
    pub intent: IntentType,
    #[serde(rename = "kd")]
    pub difficulty: f64,
}

impl KeywordRecord {
    pub fn is_global_fallback(&self) -> bool {
        self.global_volume_source == GlobalVolumeSource::DomesticFallback
    }
}
