//! Two-group comparison input

use crate::{Error, Group, GroupStatistics, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Day on which the group statistics were observed unless told otherwise
pub const DEFAULT_OBSERVATION_DAY: u32 = 90;

/// Projection horizon offered by the extended report
pub const DEFAULT_PROJECT_DAY: u32 = 180;

fn default_observation_day() -> u32 {
    DEFAULT_OBSERVATION_DAY
}

/// Active vs. placebo comparison with an optional projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialComparison {
    /// Treatment arm
    pub active: GroupStatistics,
    /// Control arm
    pub placebo: GroupStatistics,
    /// Day the means were observed (growth factor denominator)
    #[serde(default = "default_observation_day")]
    pub observation_day: u32,
    /// Day to project the observed change to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_day: Option<u32>,
}

impl TrialComparison {
    /// Create a comparison observed on the default day with no projection
    pub fn new(active: GroupStatistics, placebo: GroupStatistics) -> Self {
        Self {
            active,
            placebo,
            observation_day: DEFAULT_OBSERVATION_DAY,
            project_day: None,
        }
    }

    /// Set the observation day
    pub fn with_observation_day(mut self, day: u32) -> Self {
        self.observation_day = day;
        self
    }

    /// Request a projection to `day`
    pub fn with_project_day(mut self, day: u32) -> Self {
        self.project_day = Some(day);
        self
    }

    /// Get the statistics for a group
    pub fn group(&self, group: Group) -> &GroupStatistics {
        match group {
            Group::Active => &self.active,
            Group::Placebo => &self.placebo,
        }
    }

    /// Same comparison with the two arms exchanged
    pub fn swapped(&self) -> Self {
        Self {
            active: self.placebo,
            placebo: self.active,
            ..*self
        }
    }

    /// Total degrees of freedom of the pooled-variance t-test
    ///
    /// Saturates at `usize::MAX`; [`validate`](Self::validate) rejects
    /// sizes whose sum overflows.
    pub fn degrees_of_freedom(&self) -> usize {
        self.active
            .sample_size
            .saturating_add(self.placebo.sample_size)
            .saturating_sub(2)
    }

    /// Validate the whole comparison
    ///
    /// Checks run in a fixed order: sample sizes, parameters, observation
    /// day, variance, baselines, projection. The first failure is returned.
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(kind = err.kind(), "rejected comparison: {err}");
        }
        result
    }

    fn check(&self) -> Result<()> {
        for group in [Group::Active, Group::Placebo] {
            let stats = self.group(group);
            if stats.sample_size < crate::MIN_SAMPLE_SIZE {
                return Err(Error::InvalidSampleSize {
                    group,
                    actual: stats.sample_size,
                });
            }
        }
        if self
            .active
            .sample_size
            .checked_add(self.placebo.sample_size)
            .is_none()
        {
            return Err(Error::sample_size_overflow(
                self.active.sample_size,
                self.placebo.sample_size,
            ));
        }

        self.active.validate(Group::Active)?;
        self.placebo.validate(Group::Placebo)?;

        if self.observation_day == 0 {
            return Err(Error::InvalidParameter(
                "observation day must be at least 1".to_string(),
            ));
        }

        if self.active.std_dev == 0.0 && self.placebo.std_dev == 0.0 {
            return Err(Error::DegenerateVariance);
        }

        for group in [Group::Active, Group::Placebo] {
            if self.group(group).baseline == Some(0.0) {
                return Err(Error::DivisionByZero { group });
            }
        }

        if let Some(project_day) = self.project_day {
            if project_day <= self.observation_day {
                return Err(Error::InvalidProjection {
                    observation_day: self.observation_day,
                    project_day,
                });
            }
        }

        Ok(())
    }
}
