//! Effect size, t-test and projection from two-group summary statistics
//!
//! This crate turns a [`TrialComparison`](trial_core::TrialComparison)
//! (sample size, mean change, standard deviation and optional baseline per
//! group) into the derived metrics of a two-arm trial.
//!
//! # Overview
//!
//! - **Pooled SD**: equal-variance pooled standard deviation
//! - **t-test**: two-sample Student's t with n₁ + n₂ - 2 degrees of freedom
//!   and a two-tailed p-value from the regularized incomplete beta function
//! - **Cohen's d**: mean difference in pooled-SD units, banded at 0.2 / 0.5 / 0.8
//! - **Percent change**: mean change relative to baseline, per group
//! - **Projection**: linear extrapolation of the observed change to a later day
//!
//! # Example
//!
//! ```rust
//! use trial_core::{GroupStatistics, TrialComparison};
//! use trial_effect::{EffectSizeCalculator, EffectSizeInterpretation};
//!
//! let comparison = TrialComparison::new(
//!     GroupStatistics::new(20, 11.0, 18.28),
//!     GroupStatistics::new(10, 1.9, 16.22),
//! )
//! .with_project_day(180);
//!
//! let result = EffectSizeCalculator::new().compute(&comparison).unwrap();
//! assert_eq!(result.degrees_of_freedom, 28);
//! assert_eq!(result.interpretation, EffectSizeInterpretation::Moderate);
//! println!("d = {:.2}, p = {:.3}", result.cohens_d, result.p_value);
//! ```

mod calculator;
mod cohen_d;
mod config;
mod percent_change;
mod projection;
mod types;

// Re-exports
pub use calculator::{EffectSizeCalculator, EffectSizeResult};
pub use cohen_d::{pooled_std_dev, CohenD};
pub use config::CalculatorConfig;
pub use percent_change::percent_change;
pub use projection::{project_effect, LinearProjection, ProjectedEffect};
pub use t_test::{t_test_from_pooled, two_sample_t_test, two_tailed_p_value, TTestResult};
pub use types::{
    BandingMode, EffectSize, EffectSizeInterpretation, LARGE_THRESHOLD, MODERATE_THRESHOLD,
    SMALL_THRESHOLD,
};

/// Compute with the default (signed banding) calculator
pub fn compute(comparison: &trial_core::TrialComparison) -> trial_core::Result<EffectSizeResult> {
    EffectSizeCalculator::new().compute(comparison)
}
