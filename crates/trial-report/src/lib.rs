//! Reports for two-group effect size results
//!
//! - [`ReportFormatter`]: labelled text lines and a one-row [`TabularRecord`]
//! - [`export`]: spreadsheet exporters ([`XlsxExporter`], [`CsvExporter`])
//!   that serialize a record into downloadable bytes
//!
//! # Example
//!
//! ```rust
//! use trial_core::{GroupStatistics, TrialComparison};
//! use trial_report::{export_report, ReportFormatter, XlsxExporter};
//!
//! let comparison = TrialComparison::new(
//!     GroupStatistics::new(20, 11.0, 18.28).with_baseline(150.0),
//!     GroupStatistics::new(10, 1.9, 16.22).with_baseline(152.0),
//! )
//! .with_project_day(180);
//! let result = trial_effect::compute(&comparison).unwrap();
//!
//! let formatter = ReportFormatter::new("Hair count").with_unit("hairs");
//! println!("{}", formatter.render(&result));
//!
//! let export = export_report(&XlsxExporter::new(), &formatter.record(&result), "").unwrap();
//! assert_eq!(export.file_name, "effect_size_results.xlsx");
//! ```

pub mod error;
pub mod export;
mod formatter;
mod record;

pub use error::{Error, Result};
pub use export::{
    export_report, normalize_file_name, CsvExporter, ReportExport, TabularExporter,
    XlsxExporter, DEFAULT_FILE_STEM,
};
pub use formatter::ReportFormatter;
pub use record::{Cell, TabularRecord};
