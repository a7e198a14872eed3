//! Per-group summary statistics

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest sample size for which a pooled variance exists
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Arm of a two-group trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Treatment arm
    Active,
    /// Control arm
    Placebo,
}

impl Group {
    /// Get the display name of the group
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Placebo => "placebo",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics for one group
///
/// `mean` is the mean change from baseline over the observation period and
/// `std_dev` its standard deviation. `baseline` is only needed when a percent
/// change is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    /// Number of subjects
    pub sample_size: usize,
    /// Mean change
    pub mean: f64,
    /// Standard deviation of the change
    pub std_dev: f64,
    /// Baseline value used for percent change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
}

impl GroupStatistics {
    /// Create group statistics without a baseline
    pub fn new(sample_size: usize, mean: f64, std_dev: f64) -> Self {
        Self {
            sample_size,
            mean,
            std_dev,
            baseline: None,
        }
    }

    /// Attach a baseline value
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Degrees of freedom contributed to the pooled variance (n - 1)
    pub fn degrees_of_freedom(&self) -> usize {
        self.sample_size.saturating_sub(1)
    }

    /// Sample variance (sd²)
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Check sample size, finiteness and sign constraints for this group
    pub fn validate(&self, group: Group) -> Result<()> {
        if self.sample_size < MIN_SAMPLE_SIZE {
            return Err(Error::InvalidSampleSize {
                group,
                actual: self.sample_size,
            });
        }

        if !self.mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "{group} mean must be a finite number, got {}",
                self.mean
            )));
        }

        if !self.std_dev.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "{group} standard deviation must be a finite number, got {}",
                self.std_dev
            )));
        }

        if self.std_dev < 0.0 {
            return Err(Error::negative_std_dev(group, self.std_dev));
        }

        if let Some(baseline) = self.baseline {
            if !baseline.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "{group} baseline must be a finite number, got {baseline}"
                )));
            }
        }

        Ok(())
    }
}
