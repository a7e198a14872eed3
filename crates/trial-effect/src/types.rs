//! Types for effect size representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower edge of the "small" band
pub const SMALL_THRESHOLD: f64 = 0.2;
/// Lower edge of the "moderate" band
pub const MODERATE_THRESHOLD: f64 = 0.5;
/// Lower edge of the "large" band
pub const LARGE_THRESHOLD: f64 = 0.8;

/// Which value of Cohen's d is compared against the band thresholds
///
/// `Signed` compares d as computed, so an effect in favour of placebo
/// always lands in the lowest band. `Absolute` compares |d|.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandingMode {
    /// Band the signed value
    #[default]
    Signed,
    /// Band the absolute value
    Absolute,
}

impl BandingMode {
    /// Value that is compared against the thresholds
    pub fn banded_value(&self, magnitude: f64) -> f64 {
        match self {
            Self::Signed => magnitude,
            Self::Absolute => magnitude.abs(),
        }
    }
}

impl fmt::Display for BandingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => f.write_str("signed"),
            Self::Absolute => f.write_str("absolute"),
        }
    }
}

/// Interpretation of a standardized mean difference following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSizeInterpretation {
    /// d < 0.2
    VerySmall,
    /// 0.2 <= d < 0.5
    Small,
    /// 0.5 <= d < 0.8
    Moderate,
    /// d >= 0.8
    Large,
}

impl EffectSizeInterpretation {
    /// Band a Cohen's d value. Bands are half-open: each threshold belongs
    /// to the band above it.
    pub fn from_magnitude(magnitude: f64, banding: BandingMode) -> Self {
        let value = banding.banded_value(magnitude);

        if value < SMALL_THRESHOLD {
            Self::VerySmall
        } else if value < MODERATE_THRESHOLD {
            Self::Small
        } else if value < LARGE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Large
        }
    }

    /// Short band name
    pub fn label(&self) -> &'static str {
        match self {
            Self::VerySmall => "very small",
            Self::Small => "small",
            Self::Moderate => "moderate",
            Self::Large => "large",
        }
    }

    /// Sentence shown to the user and written to the report
    pub fn description(&self) -> &'static str {
        match self {
            Self::VerySmall => "Very small effect – unlikely to be clinically meaningful.",
            Self::Small => "Small effect – borderline meaningful, may need more data or time.",
            Self::Moderate => {
                "Moderate effect – likely to become significant with more time or sample size."
            }
            Self::Large => {
                "Large effect – highly likely to become statistically and clinically significant."
            }
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} effect", self.label())
    }
}

/// A Cohen's d value with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectSize {
    /// Standardized mean difference
    pub magnitude: f64,
    /// Band of the magnitude
    pub interpretation: EffectSizeInterpretation,
}

impl EffectSize {
    /// Create a new effect size, banding it with `banding`
    pub fn new(magnitude: f64, banding: BandingMode) -> Self {
        Self {
            magnitude,
            interpretation: EffectSizeInterpretation::from_magnitude(magnitude, banding),
        }
    }

    /// Check if the effect is in the moderate band or above
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Moderate | EffectSizeInterpretation::Large
        )
    }

    /// Check if the effect favours the active group
    pub fn favors_active(&self) -> bool {
        self.magnitude > 0.0
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cohen's d: {:.3} ({})", self.magnitude, self.interpretation)
    }
}
