//! Linear extrapolation of the observed change to a later day
//!
//! The observed means are scaled by `project_day / observation_day`, i.e.
//! the change is assumed to keep accruing at a constant daily rate. This is
//! a naive linear extrapolation, not a disease-progression model. The
//! pooled standard deviation is kept at its observed value, so the
//! projected d grows by the same factor as the means.

use crate::{CohenD, EffectSizeInterpretation};
use serde::Serialize;
use trial_core::{Error, Result};

/// Projected means and effect size at a later day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedEffect {
    /// Day the means are projected to
    pub project_day: u32,
    /// project_day / observation_day
    pub growth_factor: f64,
    /// Active mean scaled by the growth factor
    pub projected_active: f64,
    /// Placebo mean scaled by the growth factor
    pub projected_placebo: f64,
    /// projected_active - projected_placebo
    pub projected_difference: f64,
    /// projected_difference / pooled SD
    pub projected_d: f64,
    /// Band of projected_d
    pub interpretation: EffectSizeInterpretation,
}

/// Observation day and projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearProjection {
    observation_day: u32,
    project_day: u32,
}

impl LinearProjection {
    /// Create a projection from `observation_day` to `project_day`
    pub fn new(observation_day: u32, project_day: u32) -> Result<Self> {
        if observation_day == 0 {
            return Err(Error::InvalidParameter(
                "observation day must be at least 1".to_string(),
            ));
        }
        if project_day <= observation_day {
            return Err(Error::InvalidProjection {
                observation_day,
                project_day,
            });
        }

        Ok(Self {
            observation_day,
            project_day,
        })
    }

    /// project_day / observation_day, always > 1
    pub fn growth_factor(&self) -> f64 {
        f64::from(self.project_day) / f64::from(self.observation_day)
    }

    /// Project both means and re-standardize with the observed pooled SD
    pub fn project(
        &self,
        active_mean: f64,
        placebo_mean: f64,
        pooled_sd: f64,
        cohen: &CohenD,
    ) -> Result<ProjectedEffect> {
        project_effect(
            self.project_day,
            self.growth_factor(),
            active_mean,
            placebo_mean,
            pooled_sd,
            cohen,
        )
    }
}

/// Scale the means by `growth_factor` and compute the projected d
///
/// A growth factor of exactly 1 reproduces the observed means and d.
pub fn project_effect(
    project_day: u32,
    growth_factor: f64,
    active_mean: f64,
    placebo_mean: f64,
    pooled_sd: f64,
    cohen: &CohenD,
) -> Result<ProjectedEffect> {
    if !growth_factor.is_finite() || growth_factor <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "growth factor must be positive, got {growth_factor}"
        )));
    }

    let projected_active = active_mean * growth_factor;
    let projected_placebo = placebo_mean * growth_factor;
    if !projected_active.is_finite() || !projected_placebo.is_finite() {
        return Err(Error::non_finite("projected mean"));
    }

    let projected_difference = projected_active - projected_placebo;
    let effect = cohen.from_pooled(projected_difference, pooled_sd)?;

    Ok(ProjectedEffect {
        project_day,
        growth_factor,
        projected_active,
        projected_placebo,
        projected_difference,
        projected_d: effect.magnitude,
        interpretation: effect.interpretation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BandingMode;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_growth_factor() {
        let projection = LinearProjection::new(90, 180).unwrap();
        assert_eq!(projection.growth_factor(), 2.0);
        assert_abs_diff_eq!(
            LinearProjection::new(84, 365).unwrap().growth_factor(),
            365.0 / 84.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_projection_doubles_effect() {
        let projection = LinearProjection::new(90, 180).unwrap();
        let projected = projection
            .project(11.0, 1.9, 17.644_105_855, &CohenD::new())
            .unwrap();

        assert_eq!(projected.project_day, 180);
        assert_abs_diff_eq!(projected.projected_active, 22.0, epsilon = 1e-12);
        assert_abs_diff_eq!(projected.projected_placebo, 3.8, epsilon = 1e-12);
        assert_abs_diff_eq!(projected.projected_difference, 18.2, epsilon = 1e-12);
        assert_abs_diff_eq!(projected.projected_d, 1.031_505_94, epsilon = 1e-7);
        assert_eq!(projected.interpretation, EffectSizeInterpretation::Large);
    }

    #[test]
    fn test_unit_growth_is_identity() {
        let cohen = CohenD::new();
        let (active, placebo, pooled) = (11.0, 1.9, 17.644_105_855);
        let observed = cohen.from_pooled(active - placebo, pooled).unwrap();

        let projected = project_effect(90, 1.0, active, placebo, pooled, &cohen).unwrap();
        assert_eq!(projected.projected_active, active);
        assert_eq!(projected.projected_placebo, placebo);
        assert_eq!(projected.projected_d, observed.magnitude);
        assert_eq!(projected.interpretation, observed.interpretation);
    }

    #[test]
    fn test_invalid_horizons() {
        assert_eq!(
            LinearProjection::new(90, 90).unwrap_err(),
            Error::InvalidProjection {
                observation_day: 90,
                project_day: 90
            }
        );
        assert!(LinearProjection::new(90, 30).is_err());
        assert!(LinearProjection::new(0, 30).is_err());
    }

    #[test]
    fn test_projection_uses_banding_mode() {
        let cohen = CohenD::new().with_banding(BandingMode::Absolute);
        let projected = LinearProjection::new(30, 90)
            .unwrap()
            .project(0.0, 1.0, 1.0, &cohen)
            .unwrap();
        assert_abs_diff_eq!(projected.projected_d, -3.0, epsilon = 1e-12);
        assert_eq!(projected.interpretation, EffectSizeInterpretation::Large);
    }

    #[test]
    fn test_bad_growth_factor() {
        let cohen = CohenD::new();
        assert!(project_effect(90, 0.0, 1.0, 0.0, 1.0, &cohen).is_err());
        assert!(project_effect(90, f64::NAN, 1.0, 0.0, 1.0, &cohen).is_err());
    }
}
