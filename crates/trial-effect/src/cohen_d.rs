//! Cohen's d from group summary statistics
//!
//! Cohen's d expresses the difference between two group means in units of
//! the pooled standard deviation:
//!
//! ```text
//! s_p = sqrt(((n₁ - 1)·s₁² + (n₂ - 1)·s₂²) / (n₁ + n₂ - 2))
//! d   = (x̄₁ - x̄₂) / s_p
//! ```
//!
//! The pooled estimator assumes equal population variances. No small-sample
//! (Hedges) correction is applied.

use crate::{BandingMode, EffectSize};
use trial_core::{Error, Group, GroupStatistics, Result};

/// Pooled standard deviation of two groups
///
/// Fails with [`Error::InvalidSampleSize`] when either group has fewer than
/// two subjects and with [`Error::DegenerateVariance`] when the pooled value
/// is zero.
pub fn pooled_std_dev(active: &GroupStatistics, placebo: &GroupStatistics) -> Result<f64> {
    active.validate(Group::Active)?;
    placebo.validate(Group::Placebo)?;

    let df_active = active.degrees_of_freedom() as f64;
    let df_placebo = placebo.degrees_of_freedom() as f64;
    let pooled_variance = (df_active * active.variance() + df_placebo * placebo.variance())
        / (df_active + df_placebo);
    let pooled = pooled_variance.sqrt();

    if !pooled.is_finite() {
        return Err(Error::non_finite("pooled standard deviation"));
    }
    if pooled <= 0.0 {
        return Err(Error::DegenerateVariance);
    }

    Ok(pooled)
}

/// Cohen's d estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD {
    banding: BandingMode,
}

impl CohenD {
    /// Create a new Cohen's d estimator banding the signed value
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how d is banded
    pub fn with_banding(mut self, banding: BandingMode) -> Self {
        self.banding = banding;
        self
    }

    /// Compute d for active vs. placebo
    pub fn compute(
        &self,
        active: &GroupStatistics,
        placebo: &GroupStatistics,
    ) -> Result<EffectSize> {
        let pooled = pooled_std_dev(active, placebo)?;
        self.from_pooled(active.mean - placebo.mean, pooled)
    }

    /// Compute d from an already pooled standard deviation
    pub fn from_pooled(&self, mean_difference: f64, pooled_sd: f64) -> Result<EffectSize> {
        if pooled_sd <= 0.0 {
            return Err(Error::DegenerateVariance);
        }

        let d = mean_difference / pooled_sd;
        if !d.is_finite() {
            return Err(Error::non_finite("Cohen's d"));
        }

        Ok(EffectSize::new(d, self.banding))
    }
}
