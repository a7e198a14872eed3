use super::TabularExporter;
use crate::{Error, Result, TabularRecord};

/// Comma-separated export of the report row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl TabularExporter for CsvExporter {
    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }

    fn export(&self, record: &TabularRecord) -> Result<Vec<u8>> {
        if record.is_empty() {
            return Err(Error::InvalidInput("record has no columns".to_string()));
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(record.headers())?;
        writer.write_record(record.cells().map(ToString::to_string))?;
        writer
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))
    }
}
