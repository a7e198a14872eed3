//! Loading and validating comparisons the way the front-ends receive them

use proptest::prelude::*;
use trial_core::{Error, Group, GroupStatistics, TrialComparison, DEFAULT_OBSERVATION_DAY};

#[test]
fn test_json_with_defaults() {
    let json = r#"{
        "active": { "sample_size": 20, "mean": 11.0, "std_dev": 18.28 },
        "placebo": { "sample_size": 10, "mean": 1.9, "std_dev": 16.22 }
    }"#;

    let comparison: TrialComparison = serde_json::from_str(json).unwrap();
    assert_eq!(comparison.observation_day, DEFAULT_OBSERVATION_DAY);
    assert_eq!(comparison.project_day, None);
    assert_eq!(comparison.active.baseline, None);
    assert!(comparison.validate().is_ok());
}

#[test]
fn test_json_with_baseline_and_projection() {
    let json = r#"{
        "active": { "sample_size": 20, "mean": 11.0, "std_dev": 18.28, "baseline": 150.0 },
        "placebo": { "sample_size": 10, "mean": 1.9, "std_dev": 16.22, "baseline": 148.0 },
        "observation_day": 84,
        "project_day": 168
    }"#;

    let comparison: TrialComparison = serde_json::from_str(json).unwrap();
    assert_eq!(comparison.active.baseline, Some(150.0));
    assert_eq!(comparison.observation_day, 84);
    assert_eq!(comparison.project_day, Some(168));
}

#[test]
fn test_json_round_trip_skips_missing_options() {
    let comparison = TrialComparison::new(
        GroupStatistics::new(4, 1.0, 2.0),
        GroupStatistics::new(4, 0.5, 2.0),
    );
    let json = serde_json::to_string(&comparison).unwrap();
    assert!(!json.contains("baseline"));
    assert!(!json.contains("project_day"));
}

proptest! {
    #[test]
    fn prop_small_groups_always_rejected(
        n_small in 0usize..2,
        n_other in 2usize..500,
        mean in -100.0f64..100.0,
        sd in 0.0f64..50.0,
        small_is_active in any::<bool>(),
    ) {
        let small = GroupStatistics::new(n_small, mean, sd);
        let other = GroupStatistics::new(n_other, mean, sd + 1.0);
        let (comparison, group) = if small_is_active {
            (TrialComparison::new(small, other), Group::Active)
        } else {
            (TrialComparison::new(other, small), Group::Placebo)
        };

        prop_assert_eq!(
            comparison.validate().unwrap_err(),
            Error::InvalidSampleSize { group, actual: n_small }
        );
    }

    #[test]
    fn prop_valid_inputs_accepted(
        n1 in 2usize..1000,
        n2 in 2usize..1000,
        mean1 in -1e3f64..1e3,
        mean2 in -1e3f64..1e3,
        sd1 in 0.001f64..100.0,
        sd2 in 0.0f64..100.0,
        extra_days in 1u32..365,
    ) {
        let comparison = TrialComparison::new(
            GroupStatistics::new(n1, mean1, sd1),
            GroupStatistics::new(n2, mean2, sd2),
        )
        .with_project_day(DEFAULT_OBSERVATION_DAY + extra_days);

        prop_assert!(comparison.validate().is_ok());
    }
}
