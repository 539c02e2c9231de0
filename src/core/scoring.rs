//! Heuristic scores derived from the planner metrics.

use crate::domain::model::IntentType;

const COMPETITION_WEIGHT: f64 = 0.7;
const VOLUME_WEIGHT: f64 = 0.2;
const CPC_WEIGHT: f64 = 0.1;
const FACTOR_CAP: f64 = 100.0;

// 依優先順序檢查：交易型 > 商業型 > 資訊型
const TRANSACTIONAL_INDICATORS: &[&str] = &[
    "buy", "price", "cheap", "discount", "deal", "coupon", "purchase", "shop", "order",
    "购买", "价格", "优惠", "折扣", "订购", "下单", "商店",
];

const COMMERCIAL_INDICATORS: &[&str] = &[
    "best", "top", "review", "compare", "vs", "versus", "ranking",
    "最好", "推荐", "评测", "对比", "排名",
];

const INFORMATIONAL_INDICATORS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "guide", "tutorial",
    "是什么", "怎么", "为什么", "如何", "教程", "指南",
];

/// Keyword difficulty in `[0, 100]`, rounded to one decimal place.
///
/// `competition_index * 0.7 + min(100, volume / 100) * 0.2 + min(100, cpc * 20) * 0.1`.
/// Absent CPC contributes nothing.
pub fn keyword_difficulty(competition_index: u32, volume: u64, cpc: Option<f64>) -> f64 {
    let volume_factor = (volume as f64 / 100.0).min(FACTOR_CAP);
    let cpc_factor = cpc
        .filter(|value| *value > 0.0)
        .map(|value| (value * 20.0).min(FACTOR_CAP))
        .unwrap_or(0.0);

    let kd = competition_index as f64 * COMPETITION_WEIGHT
        + volume_factor * VOLUME_WEIGHT
        + cpc_factor * CPC_WEIGHT;

    tracing::debug!(
        "KD: competition_index={}, volume={}, cpc={:?} -> {:.3}",
        competition_index,
        volume,
        cpc,
        kd
    );

    (kd * 10.0).round() / 10.0
}

pub fn classify_intent(keyword: &str) -> IntentType {
    let lowered = keyword.to_lowercase();
    let ordered: [(IntentType, &[&str]); 3] = [
        (IntentType::Transactional, TRANSACTIONAL_INDICATORS),
        (IntentType::Commercial, COMMERCIAL_INDICATORS),
        (IntentType::Informational, INFORMATIONAL_INDICATORS),
    ];

    let intent = ordered
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|i| lowered.contains(i)))
        .map(|(intent, _)| *intent)
        .unwrap_or(IntentType::Informational);

    tracing::debug!("Keyword '{}' classified as {}", keyword, intent.code());
    intent
}
