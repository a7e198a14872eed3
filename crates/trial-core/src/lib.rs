//! Core types for two-group trial statistics
//!
//! This crate holds the pieces every other crate in the workspace builds on:
//!
//! - [`GroupStatistics`]: summary statistics for one arm of a trial
//! - [`TrialComparison`]: the active and placebo arms plus the observation
//!   day and an optional projection horizon
//! - [`Error`] / [`Result`]: the error taxonomy shared by the calculator and
//!   the report layer
//!
//! Validation lives here so that a comparison is rejected as a whole before
//! any derived metric is computed.
//!
//! # Example
//!
//! ```rust
//! use trial_core::{GroupStatistics, TrialComparison};
//!
//! let comparison = TrialComparison::new(
//!     GroupStatistics::new(20, 11.0, 18.28),
//!     GroupStatistics::new(10, 1.9, 16.22),
//! )
//! .with_project_day(180);
//!
//! assert!(comparison.validate().is_ok());
//! assert_eq!(comparison.observation_day, 90);
//! ```

pub mod comparison;
pub mod error;
pub mod group;

pub use comparison::{TrialComparison, DEFAULT_OBSERVATION_DAY, DEFAULT_PROJECT_DAY};
pub use error::{Error, Result};
pub use group::{Group, GroupStatistics, MIN_SAMPLE_SIZE};
