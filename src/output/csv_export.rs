use crate::domain::model::KeywordRecord;
use crate::output::labels::{
    competition_label, csv_headers, global_source_label, intent_label, unavailable, Locale,
};
use crate::utils::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes one CSV row per record and flushes after every row so a batch
/// interrupted halfway still leaves a usable file.
pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
    locale: Locale,
}

impl CsvExporter<File> {
    pub fn create<P: AsRef<Path>>(path: P, locale: Locale) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::new(file, locale))
    }
}

impl<W: Write> CsvExporter<W> {
    pub fn new(inner: W, locale: Locale) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
            locale,
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.writer.write_record(csv_headers(self.locale))?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_record(&mut self, record: &KeywordRecord) -> Result<()> {
        let cpc = match record.cpc {
            Some(value) => format!("{:.2}", value),
            None => unavailable(self.locale).to_string(),
        };

        self.writer.write_record([
            record.keyword.clone(),
            record.volume_domestic.to_string(),
            record.volume_global.to_string(),
            global_source_label(record.global_volume_source, self.locale).to_string(),
            format!("{:.1}", record.difficulty),
            cpc,
            intent_label(record.intent, self.locale).to_string(),
            competition_label(record.competition, self.locale).to_string(),
            record.competition_index.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::utils::error::PlannerError::IoError(e.into_error()))
    }
}
