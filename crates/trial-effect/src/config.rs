//! Calculator configuration

use crate::BandingMode;
use serde::{Deserialize, Serialize};

/// Settings for [`EffectSizeCalculator`](crate::EffectSizeCalculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How Cohen's d and the projected d are banded
    pub banding: BandingMode,
}

impl CalculatorConfig {
    /// Configuration banding on |d|
    pub fn absolute() -> Self {
        Self {
            banding: BandingMode::Absolute,
        }
    }
}
