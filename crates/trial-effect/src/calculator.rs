//! The effect size calculator
//!
//! [`EffectSizeCalculator::compute`] validates a [`TrialComparison`] as a
//! whole and then derives every metric in one pass. A comparison either
//! yields a complete [`EffectSizeResult`] or an error; there is no partial
//! result.

use crate::{
    cohen_d::pooled_std_dev,
    percent_change::percent_change,
    projection::{LinearProjection, ProjectedEffect},
    t_test::t_test_from_pooled,
    BandingMode, CalculatorConfig, CohenD, EffectSizeInterpretation,
};
use serde::Serialize;
use tracing::{debug, instrument};
use trial_core::{Error, Group, Result, TrialComparison};

/// Everything derived from one comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectSizeResult {
    /// Day the means were observed
    pub observation_day: u32,
    /// (active, placebo)
    pub sample_sizes: (usize, usize),
    /// active mean - placebo mean
    pub mean_difference: f64,
    /// Pooled standard deviation
    pub pooled_sd: f64,
    /// Two-sample t statistic
    pub t_value: f64,
    /// n₁ + n₂ - 2
    pub degrees_of_freedom: usize,
    /// Two-tailed p-value
    pub p_value: f64,
    /// mean_difference / pooled_sd
    pub cohens_d: f64,
    /// Band of cohens_d
    pub interpretation: EffectSizeInterpretation,
    /// Banding mode used for both interpretations
    pub banding: BandingMode,
    /// Active mean as a percentage of its baseline
    pub percent_change_active: Option<f64>,
    /// Placebo mean as a percentage of its baseline
    pub percent_change_placebo: Option<f64>,
    /// Linear projection, when a projection day was given
    pub projection: Option<ProjectedEffect>,
}

impl EffectSizeResult {
    /// Check significance at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// Percent change for one group
    pub fn percent_change(&self, group: Group) -> Option<f64> {
        match group {
            Group::Active => self.percent_change_active,
            Group::Placebo => self.percent_change_placebo,
        }
    }

    /// True when at least one baseline was supplied
    pub fn has_percent_change(&self) -> bool {
        self.percent_change_active.is_some() || self.percent_change_placebo.is_some()
    }

    fn ensure_finite(&self) -> Result<()> {
        let checks = [
            ("mean difference", Some(self.mean_difference)),
            ("pooled standard deviation", Some(self.pooled_sd)),
            ("t-value", Some(self.t_value)),
            ("p-value", Some(self.p_value)),
            ("Cohen's d", Some(self.cohens_d)),
            ("active percent change", self.percent_change_active),
            ("placebo percent change", self.percent_change_placebo),
            ("projected d", self.projection.map(|p| p.projected_d)),
            (
                "projected mean difference",
                self.projection.map(|p| p.projected_difference),
            ),
        ];

        for (name, value) in checks {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(Error::non_finite(name));
                }
            }
        }
        Ok(())
    }
}

/// Computes t-test, p-value, Cohen's d, percent change and projection
///
/// Holds only immutable configuration, so one calculator can be shared
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectSizeCalculator {
    config: CalculatorConfig,
    cohen: CohenD,
}

impl EffectSizeCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator from a configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            cohen: CohenD::new().with_banding(config.banding),
        }
    }

    /// Create a calculator with the given banding mode
    pub fn with_banding(banding: BandingMode) -> Self {
        Self::with_config(CalculatorConfig { banding })
    }

    /// Compute every metric for `comparison`
    #[instrument(
        skip(self, comparison),
        fields(
            n_active = comparison.active.sample_size,
            n_placebo = comparison.placebo.sample_size,
            banding = %self.config.banding,
        )
    )]
    pub fn compute(&self, comparison: &TrialComparison) -> Result<EffectSizeResult> {
        comparison.validate()?;

        let active = &comparison.active;
        let placebo = &comparison.placebo;

        let mean_difference = active.mean - placebo.mean;
        let pooled_sd = pooled_std_dev(active, placebo)?;
        let t_test = t_test_from_pooled(
            mean_difference,
            pooled_sd,
            active.sample_size,
            placebo.sample_size,
        )?;
        let effect = self.cohen.from_pooled(mean_difference, pooled_sd)?;

        let percent_change_active = active
            .baseline
            .map(|baseline| percent_change(active.mean, baseline, Group::Active))
            .transpose()?;
        let percent_change_placebo = placebo
            .baseline
            .map(|baseline| percent_change(placebo.mean, baseline, Group::Placebo))
            .transpose()?;

        let projection = comparison
            .project_day
            .map(|day| {
                LinearProjection::new(comparison.observation_day, day)?.project(
                    active.mean,
                    placebo.mean,
                    pooled_sd,
                    &self.cohen,
                )
            })
            .transpose()?;

        let result = EffectSizeResult {
            observation_day: comparison.observation_day,
            sample_sizes: (active.sample_size, placebo.sample_size),
            mean_difference,
            pooled_sd,
            t_value: t_test.t_value,
            degrees_of_freedom: t_test.degrees_of_freedom,
            p_value: t_test.p_value,
            cohens_d: effect.magnitude,
            interpretation: effect.interpretation,
            banding: self.config.banding,
            percent_change_active,
            percent_change_placebo,
            projection,
        };
        result.ensure_finite()?;

        debug!(
            mean_difference,
            pooled_sd,
            t_value = result.t_value,
            df = result.degrees_of_freedom,
            p_value = result.p_value,
            cohens_d = result.cohens_d,
            "computed effect size ({})",
            result.interpretation
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use trial_core::GroupStatistics;

    fn reference() -> TrialComparison {
        TrialComparison::new(
            GroupStatistics::new(20, 11.0, 18.28),
            GroupStatistics::new(10, 1.9, 16.22),
        )
    }

    #[test]
    fn test_reference_comparison() {
        let result = EffectSizeCalculator::new().compute(&reference()).unwrap();

        assert_abs_diff_eq!(result.mean_difference, 9.1, epsilon = 1e-12);
        assert_abs_diff_eq!(result.pooled_sd, 17.644_105_855, epsilon = 1e-8);
        assert_abs_diff_eq!(result.t_value, 1.331_668_443, epsilon = 1e-8);
        assert_eq!(result.degrees_of_freedom, 28);
        assert_abs_diff_eq!(result.p_value, 0.193_709, epsilon = 1e-5);
        assert_abs_diff_eq!(result.cohens_d, 0.515_752_970, epsilon = 1e-8);
        assert_eq!(result.interpretation, EffectSizeInterpretation::Moderate);
        assert_eq!(result.sample_sizes, (20, 10));
        assert_eq!(result.percent_change_active, None);
        assert_eq!(result.projection, None);
        assert!(!result.has_percent_change());
    }

    #[test]
    fn test_extended_comparison() {
        let mut comparison = reference().with_project_day(180);
        comparison.active = comparison.active.with_baseline(150.0);
        comparison.placebo = comparison.placebo.with_baseline(152.0);

        let result = EffectSizeCalculator::new().compute(&comparison).unwrap();

        assert_abs_diff_eq!(result.percent_change_active.unwrap(), 7.333_333_333, epsilon = 1e-8);
        assert_abs_diff_eq!(result.percent_change_placebo.unwrap(), 1.25, epsilon = 1e-12);

        let projection = result.projection.unwrap();
        assert_eq!(projection.project_day, 180);
        assert_eq!(projection.growth_factor, 2.0);
        assert_abs_diff_eq!(projection.projected_d, 2.0 * result.cohens_d, epsilon = 1e-12);
        assert_eq!(projection.interpretation, EffectSizeInterpretation::Large);
    }

    #[test]
    fn test_one_baseline_only() {
        let mut comparison = reference();
        comparison.placebo = comparison.placebo.with_baseline(40.0);

        let result = EffectSizeCalculator::new().compute(&comparison).unwrap();
        assert_eq!(result.percent_change(Group::Active), None);
        assert_abs_diff_eq!(result.percent_change(Group::Placebo).unwrap(), 4.75, epsilon = 1e-12);
        assert!(result.has_percent_change());
    }

    #[test]
    fn test_fails_atomically() {
        let calculator = EffectSizeCalculator::new();

        let mut comparison = reference().with_project_day(60);
        assert_eq!(
            calculator.compute(&comparison).unwrap_err(),
            Error::InvalidProjection {
                observation_day: 90,
                project_day: 60
            }
        );

        comparison.project_day = None;
        comparison.active = comparison.active.with_baseline(0.0);
        assert_eq!(
            calculator.compute(&comparison).unwrap_err(),
            Error::DivisionByZero { group: Group::Active }
        );

        comparison.active.std_dev = 0.0;
        comparison.placebo.std_dev = 0.0;
        assert_eq!(calculator.compute(&comparison).unwrap_err(), Error::DegenerateVariance);
    }

    #[test]
    fn test_absolute_banding_config() {
        let swapped = reference().swapped();

        let signed = EffectSizeCalculator::new().compute(&swapped).unwrap();
        let absolute = EffectSizeCalculator::with_config(CalculatorConfig::absolute())
            .compute(&swapped)
            .unwrap();

        assert_eq!(signed.interpretation, EffectSizeInterpretation::VerySmall);
        assert_eq!(absolute.interpretation, EffectSizeInterpretation::Moderate);
        assert_eq!(signed.cohens_d, absolute.cohens_d);
        assert_eq!(absolute.banding, BandingMode::Absolute);
    }

    #[test]
    fn test_overflowing_inputs_are_rejected() {
        let comparison = TrialComparison::new(
            GroupStatistics::new(5, f64::MAX, 1.0),
            GroupStatistics::new(5, -f64::MAX, 1.0),
        );
        let err = EffectSizeCalculator::new().compute(&comparison).unwrap_err();
        assert_eq!(err.kind(), "computation");
    }
}
