use crate::domain::model::KeywordRecord;
use crate::output::labels::{
    competition_label, global_source_label, intent_label, unavailable, Locale,
};
use crate::utils::error::Result;

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_cpc(cpc: Option<f64>, locale: Locale) -> String {
    match cpc {
        Some(value) => format!("${:.2}", value),
        None => unavailable(locale).to_string(),
    }
}

pub fn format_json(record: &KeywordRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn format_report(record: &KeywordRecord, locale: Locale) -> String {
    let global_volume = if record.is_global_fallback() {
        format!(
            "{} ({})",
            group_thousands(record.volume_global),
            global_source_label(record.global_volume_source, locale)
        )
    } else {
        group_thousands(record.volume_global)
    };

    let rows: Vec<(&str, String)> = match locale {
        Locale::Zh => vec![
            ("搜索量 (目标地区)", group_thousands(record.volume_domestic)),
            ("搜索量 (全球)", global_volume),
            ("关键词难度 (KD)", format!("{:.1}", record.difficulty)),
            ("CPC", format_cpc(record.cpc, locale)),
            (
                "关键词类型",
                format!("{} ({})", intent_label(record.intent, locale), record.intent.code()),
            ),
            ("竞争度", competition_label(record.competition, locale).to_string()),
            ("竞争指数", record.competition_index.to_string()),
        ],
        Locale::En => vec![
            ("Volume (target location)", group_thousands(record.volume_domestic)),
            ("Volume (global)", global_volume),
            ("Keyword difficulty (KD)", format!("{:.1}", record.difficulty)),
            ("CPC", format_cpc(record.cpc, locale)),
            (
                "Intent",
                format!("{} ({})", intent_label(record.intent, locale), record.intent.code()),
            ),
            ("Competition", competition_label(record.competition, locale).to_string()),
            ("Competition index", record.competition_index.to_string()),
        ],
    };

    let keyword_label = match locale {
        Locale::Zh => "关键词",
        Locale::En => "Keyword",
    };

    let mut output = vec![
        format!("\n{}: {}", keyword_label, record.keyword),
        "-".repeat(50),
    ];
    output.extend(rows.into_iter().map(|(label, value)| format!("{}: {}", label, value)));
    output.join("\n")
}
