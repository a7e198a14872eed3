//! Text lines and tabular record for an effect size result

use crate::{Cell, TabularRecord};
use trial_effect::EffectSizeResult;

/// Renders an [`EffectSizeResult`] for people and spreadsheets
///
/// Optional sections (percent change, projection) appear only when the
/// result carries them.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    parameter: String,
    unit: Option<String>,
}

impl ReportFormatter {
    /// Create a formatter for the named outcome parameter
    pub fn new(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            unit: None,
        }
    }

    /// Unit appended to the mean difference line (e.g. "hairs")
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        self.unit = if unit.trim().is_empty() { None } else { Some(unit) };
        self
    }

    /// Labelled text lines
    pub fn lines(&self, result: &EffectSizeResult) -> Vec<String> {
        let mut lines = Vec::with_capacity(12);

        if !self.parameter.trim().is_empty() {
            lines.push(format!("Parameter: {}", self.parameter));
        }

        let difference = Cell::fixed2(result.mean_difference);
        lines.push(match &self.unit {
            Some(unit) => format!("Mean Difference: {difference} {unit}"),
            None => format!("Mean Difference: {difference}"),
        });
        lines.push(format!("Pooled Standard Deviation: {}", Cell::fixed2(result.pooled_sd)));
        lines.push(format!("t-value: {}", Cell::fixed2(result.t_value)));
        lines.push(format!("p-value (two-tailed): {}", Cell::fixed3(result.p_value)));
        lines.push(format!("Cohen's d (Effect Size): {}", Cell::fixed2(result.cohens_d)));

        if let Some(percent) = result.percent_change_active {
            lines.push(format!("% Change Active: {}", Cell::Percent(percent)));
        }
        if let Some(percent) = result.percent_change_placebo {
            lines.push(format!("% Change Placebo: {}", Cell::Percent(percent)));
        }

        if let Some(projection) = &result.projection {
            let day = projection.project_day;
            lines.push(format!(
                "Projected Mean Difference (Day {day}): {}",
                Cell::fixed2(projection.projected_difference)
            ));
            lines.push(format!(
                "Projected Cohen's d (Day {day}): {}",
                Cell::fixed2(projection.projected_d)
            ));
        }

        lines.push(format!("Interpretation: {}", result.interpretation.description()));
        if let Some(projection) = &result.projection {
            lines.push(format!(
                "Projected Interpretation: {}",
                projection.interpretation.description()
            ));
        }

        lines
    }

    /// Text lines joined with newlines
    pub fn render(&self, result: &EffectSizeResult) -> String {
        self.lines(result).join("\n")
    }

    /// One-row record with the report's fixed column order
    pub fn record(&self, result: &EffectSizeResult) -> TabularRecord {
        let mut record = TabularRecord::new();

        record.push("Parameter", Cell::text(self.parameter.clone()));
        record.push(
            format!("Day-{} Mean Difference", result.observation_day),
            Cell::fixed2(result.mean_difference),
        );
        record.push("Pooled SD", Cell::fixed2(result.pooled_sd));
        record.push("t-value", Cell::fixed2(result.t_value));
        record.push("p-value", Cell::fixed3(result.p_value));
        record.push("Cohen's d", Cell::fixed2(result.cohens_d));

        if result.has_percent_change() {
            record.push(
                "% Change Active",
                Cell::percent_or_empty(result.percent_change_active),
            );
            record.push(
                "% Change Placebo",
                Cell::percent_or_empty(result.percent_change_placebo),
            );
        }

        if let Some(projection) = &result.projection {
            let day = projection.project_day;
            record.push(
                format!("Projected Mean Difference (Day {day})"),
                Cell::fixed2(projection.projected_difference),
            );
            record.push(
                format!("Projected Cohen's d (Day {day})"),
                Cell::fixed2(projection.projected_d),
            );
        }

        record.push(
            "Interpretation",
            Cell::text(result.interpretation.description()),
        );
        if let Some(projection) = &result.projection {
            record.push(
                "Projected Interpretation",
                Cell::text(projection.interpretation.description()),
            );
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trial_core::{GroupStatistics, TrialComparison};
    use trial_effect::compute;

    fn basic() -> EffectSizeResult {
        compute(&TrialComparison::new(
            GroupStatistics::new(20, 11.0, 18.28),
            GroupStatistics::new(10, 1.9, 16.22),
        ))
        .unwrap()
    }

    fn extended() -> EffectSizeResult {
        compute(
            &TrialComparison::new(
                GroupStatistics::new(20, 11.0, 18.28).with_baseline(150.0),
                GroupStatistics::new(10, 1.9, 16.22).with_baseline(152.0),
            )
            .with_project_day(180),
        )
        .unwrap()
    }

    #[test]
    fn test_basic_lines() {
        let lines = ReportFormatter::default().with_unit("hairs").lines(&basic());
        assert_eq!(
            lines,
            vec![
                "Mean Difference: 9.10 hairs",
                "Pooled Standard Deviation: 17.64",
                "t-value: 1.33",
                "p-value (two-tailed): 0.194",
                "Cohen's d (Effect Size): 0.52",
                "Interpretation: Moderate effect – likely to become significant with more time or sample size.",
            ]
        );
    }

    #[test]
    fn test_extended_lines() {
        let text = ReportFormatter::new("Hair count").render(&extended());
        assert!(text.starts_with("Parameter: Hair count\nMean Difference: 9.10\n"));
        assert!(text.contains("% Change Active: 7.33%"));
        assert!(text.contains("% Change Placebo: 1.25%"));
        assert!(text.contains("Projected Mean Difference (Day 180): 18.20"));
        assert!(text.contains("Projected Cohen's d (Day 180): 1.03"));
        assert!(text.ends_with(
            "Projected Interpretation: Large effect – highly likely to become statistically and clinically significant."
        ));
    }

    #[test]
    fn test_basic_record_columns() {
        let record = ReportFormatter::new("Hair count").record(&basic());
        assert_eq!(
            record.headers().collect::<Vec<_>>(),
            vec![
                "Parameter",
                "Day-90 Mean Difference",
                "Pooled SD",
                "t-value",
                "p-value",
                "Cohen's d",
                "Interpretation",
            ]
        );
    }

    #[test]
    fn test_extended_record_columns() {
        let record = ReportFormatter::new("Hair count").record(&extended());
        assert_eq!(
            record.headers().collect::<Vec<_>>(),
            vec![
                "Parameter",
                "Day-90 Mean Difference",
                "Pooled SD",
                "t-value",
                "p-value",
                "Cohen's d",
                "% Change Active",
                "% Change Placebo",
                "Projected Mean Difference (Day 180)",
                "Projected Cohen's d (Day 180)",
                "Interpretation",
                "Projected Interpretation",
            ]
        );
        let cells: Vec<String> = record.cells().map(ToString::to_string).collect();
        assert_eq!(
            &cells[..8],
            &["Hair count", "9.10", "17.64", "1.33", "0.194", "0.52", "7.33%", "1.25%"]
        );
    }

    #[test]
    fn test_one_sided_baseline_leaves_empty_cell() {
        let result = compute(&TrialComparison::new(
            GroupStatistics::new(20, 11.0, 18.28).with_baseline(150.0),
            GroupStatistics::new(10, 1.9, 16.22),
        ))
        .unwrap();

        let record = ReportFormatter::new("x").record(&result);
        assert_eq!(record.get("% Change Placebo"), Some(&Cell::Empty));
        assert_eq!(record.len(), 9);
    }
}
