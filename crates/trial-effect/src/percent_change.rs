//! Mean change relative to baseline

use trial_core::{Error, Group, Result};

/// Mean change as a percentage of the group's baseline
pub fn percent_change(mean: f64, baseline: f64, group: Group) -> Result<f64> {
    if baseline == 0.0 {
        return Err(Error::DivisionByZero { group });
    }

    let percent = mean / baseline * 100.0;
    if !percent.is_finite() {
        return Err(Error::non_finite(&format!("{group} percent change")));
    }

    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_percent_change() {
        let active = percent_change(11.0, 150.0, Group::Active).unwrap();
        assert_abs_diff_eq!(active, 7.333_333_333, epsilon = 1e-8);

        let placebo = percent_change(-5.0, 50.0, Group::Placebo).unwrap();
        assert_abs_diff_eq!(placebo, -10.0, epsilon = 1e-12);

        let negative_baseline = percent_change(1.0, -4.0, Group::Placebo).unwrap();
        assert_abs_diff_eq!(negative_baseline, -25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_baseline() {
        assert_eq!(
            percent_change(11.0, 0.0, Group::Active).unwrap_err(),
            Error::DivisionByZero { group: Group::Active }
        );
        assert_eq!(
            percent_change(0.0, -0.0, Group::Placebo).unwrap_err(),
            Error::DivisionByZero { group: Group::Placebo }
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = percent_change(f64::MAX, 1e-300, Group::Active).unwrap_err();
        assert_eq!(err.kind(), "computation");
    }
}
