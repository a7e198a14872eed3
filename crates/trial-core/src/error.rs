//! Error types for trial statistics
//!
//! Provides a unified error type for all trial-stats crates. Every kind
//! carries a message that tells the user which input to change.

use crate::Group;
use thiserror::Error;

/// Core error type for effect size calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A group has fewer than two subjects
    #[error("Invalid sample size: {group} group needs at least 2 subjects, got {actual}")]
    InvalidSampleSize { group: Group, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Both standard deviations are zero, so t and d are undefined
    #[error(
        "Degenerate variance: pooled standard deviation is zero, \
         t-value and Cohen's d are undefined (at least one group needs a positive SD)"
    )]
    DegenerateVariance,

    /// Percent change requested against a zero baseline
    #[error("Division by zero: {group} baseline is 0, percent change is undefined")]
    DivisionByZero { group: Group },

    /// Projection horizon does not lie after the observation day
    #[error(
        "Invalid projection: projection day {project_day} must be after observation day {observation_day}"
    )]
    InvalidProjection { observation_day: u32, project_day: u32 },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable identifier for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSampleSize { .. } => "invalid_sample_size",
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::DegenerateVariance => "degenerate_variance",
            Self::DivisionByZero { .. } => "division_by_zero",
            Self::InvalidProjection { .. } => "invalid_projection",
            Self::Computation(_) => "computation",
        }
    }

    /// Create an error for a NaN/Inf input or derived value
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} is NaN or infinite"))
    }

    /// Create an error for a negative standard deviation
    pub fn negative_std_dev(group: Group, value: f64) -> Self {
        Self::InvalidParameter(format!(
            "{group} standard deviation must be >= 0, got {value}"
        ))
    }

    /// Create an error for group sizes whose sum does not fit in `usize`
    pub fn sample_size_overflow(active: usize, placebo: usize) -> Self {
        Self::InvalidParameter(format!(
            "combined sample size of {active} + {placebo} subjects is too large"
        ))
    }
}
