//! Downloadable report files
//!
//! An exporter turns a [`TabularRecord`] into the bytes of a file. Everything
//! happens in memory; writing the bytes somewhere is left to the caller.

mod delimited;
mod xlsx;

pub use self::delimited::CsvExporter;
pub use self::xlsx::XlsxExporter;

use crate::{Result, TabularRecord};
use tracing::{debug, instrument};

/// File stem used when no usable name is given
pub const DEFAULT_FILE_STEM: &str = "effect_size_results";

/// Serializes a record into a spreadsheet-compatible file
pub trait TabularExporter {
    /// Extension without the leading dot
    fn file_extension(&self) -> &'static str;

    /// MIME type of the produced bytes
    fn mime_type(&self) -> &'static str;

    /// Serialize `record` as a header row and one data row
    fn export(&self, record: &TabularRecord) -> Result<Vec<u8>>;
}

/// A named, typed byte buffer ready to be offered for download
#[derive(Debug, Clone, PartialEq)]
pub struct ReportExport {
    /// File name including extension
    pub file_name: String,
    /// MIME type
    pub mime_type: &'static str,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Export `record` and attach a normalized file name
#[instrument(skip(exporter, record), fields(extension = exporter.file_extension()))]
pub fn export_report<E: TabularExporter + ?Sized>(
    exporter: &E,
    record: &TabularRecord,
    file_name: &str,
) -> Result<ReportExport> {
    let bytes = exporter.export(record)?;
    let file_name = normalize_file_name(file_name, exporter.file_extension());
    debug!(%file_name, size = bytes.len(), "exported report");

    Ok(ReportExport {
        file_name,
        mime_type: exporter.mime_type(),
        bytes,
    })
}

/// Give `name` exactly one `.extension` suffix
///
/// Path separators are replaced so the name cannot escape the download
/// directory, and a blank name falls back to [`DEFAULT_FILE_STEM`].
pub fn normalize_file_name(name: &str, extension: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    let suffix = format!(".{extension}");
    let stem = match cleaned.len().checked_sub(suffix.len()) {
        Some(split)
            if cleaned.is_char_boundary(split)
                && cleaned[split..].eq_ignore_ascii_case(&suffix) =>
        {
            &cleaned[..split]
        }
        _ => cleaned.as_str(),
    };

    let stem = if stem.trim().is_empty() {
        DEFAULT_FILE_STEM
    } else {
        stem
    };
    format!("{stem}{suffix}")
}
