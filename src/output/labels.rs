use crate::domain::model::{CompetitionLevel, GlobalVolumeSource, IntentType};
use serde::{Deserialize, Serialize};

/// 顯示用語言，預設為中文
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

pub fn competition_label(level: CompetitionLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::Zh, CompetitionLevel::Unspecified) => "未指定",
        (Locale::Zh, CompetitionLevel::Unknown) => "未知",
        (Locale::Zh, CompetitionLevel::Low) => "低",
        (Locale::Zh, CompetitionLevel::Medium) => "中",
        (Locale::Zh, CompetitionLevel::High) => "高",
        (Locale::En, CompetitionLevel::Unspecified) => "Unspecified",
        (Locale::En, CompetitionLevel::Unknown) => "Unknown",
        (Locale::En, CompetitionLevel::Low) => "Low",
        (Locale::En, CompetitionLevel::Medium) => "Medium",
        (Locale::En, CompetitionLevel::High) => "High",
    }
}

pub fn intent_label(intent: IntentType, locale: Locale) -> &'static str {
    match (locale, intent) {
        (Locale::Zh, IntentType::Informational) => "信息型",
        (Locale::Zh, IntentType::Commercial) => "商业型",
        (Locale::Zh, IntentType::Transactional) => "交易型",
        (Locale::En, IntentType::Informational) => "Informational",
        (Locale::En, IntentType::Commercial) => "Commercial",
        (Locale::En, IntentType::Transactional) => "Transactional",
    }
}

pub fn global_source_label(source: GlobalVolumeSource, locale: Locale) -> &'static str {
    match (locale, source) {
        (Locale::Zh, GlobalVolumeSource::Global) => "全球",
        (Locale::Zh, GlobalVolumeSource::DomesticFallback) => "本地数据替代",
        (Locale::En, GlobalVolumeSource::Global) => "global",
        (Locale::En, GlobalVolumeSource::DomesticFallback) => "domestic fallback",
    }
}

pub fn unavailable(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "数据不可用",
        Locale::En => "N/A",
    }
}

pub fn not_found(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "未找到关键词数据",
        Locale::En => "No keyword data found",
    }
}

pub fn csv_headers(locale: Locale) -> [&'static str; 9] {
    match locale {
        Locale::Zh => [
            "关键词",
            "搜索量(目标地区)",
            "搜索量(全球)",
            "全球数据来源",
            "关键词难度(KD)",
            "CPC($)",
            "关键词类型",
            "竞争度",
            "竞争指数",
        ],
        Locale::En => [
            "Keyword",
            "Volume (target location)",
            "Volume (global)",
            "Global volume source",
            "Keyword difficulty (KD)",
            "CPC ($)",
            "Intent",
            "Competition",
            "Competition index",
        ],
    }
}
