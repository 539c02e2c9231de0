pub mod csv_export;
pub mod labels;
pub mod text;

pub use csv_export::CsvExporter;
pub use labels::Locale;
