//! Two-group effect size toolkit
//!
//! Umbrella crate re-exporting the workspace plus the command-line front-end.
//!
//! - [`trial_core`]: group statistics, trial comparison, errors
//! - [`trial_effect`]: t-test, Cohen's d, percent change, projection
//! - [`trial_report`]: text lines and spreadsheet export
//!
//! ```rust
//! use trial_stats::trial_core::{GroupStatistics, TrialComparison};
//! use trial_stats::trial_report::ReportFormatter;
//!
//! let comparison = TrialComparison::new(
//!     GroupStatistics::new(20, 11.0, 18.28),
//!     GroupStatistics::new(10, 1.9, 16.22),
//! );
//! let result = trial_stats::trial_effect::compute(&comparison).unwrap();
//! assert_eq!(ReportFormatter::default().lines(&result)[0], "Mean Difference: 9.10");
//! ```

pub use trial_core;
pub use trial_effect;
pub use trial_report;

pub mod cli;
pub mod shell;
