//! Adapters behind the `basic` and `extended` subcommands
//!
//! Each adapter builds a [`TrialComparison`], runs the calculator and
//! returns what should be shown. Only [`write_export`] touches the disk.

use crate::cli::{ExportFormat, ExtendedArgs, GroupArgs};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trial_core::{GroupStatistics, TrialComparison};
use trial_effect::{EffectSizeCalculator, EffectSizeResult};
use trial_report::{
    export_report, CsvExporter, ReportExport, ReportFormatter, TabularExporter, XlsxExporter,
};

/// Everything a subcommand produced
#[derive(Debug, Clone)]
pub struct ShellOutput {
    pub result: EffectSizeResult,
    pub lines: Vec<String>,
    pub export: Option<ReportExport>,
}

impl ShellOutput {
    /// Text lines, or the result as pretty JSON
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            serde_json::to_string_pretty(&self.result).context("failed to serialize result")
        } else {
            Ok(self.lines.join("\n"))
        }
    }
}

/// Load a [`TrialComparison`] from a JSON file
pub fn load_comparison(path: &Path) -> Result<TrialComparison> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid comparison JSON in {}", path.display()))
}

fn groups_from_flags(groups: &GroupArgs) -> (GroupStatistics, GroupStatistics) {
    (
        GroupStatistics::new(groups.n1, groups.mean1, groups.sd1),
        GroupStatistics::new(groups.n2, groups.mean2, groups.sd2),
    )
}

fn calculator(groups: &GroupArgs) -> EffectSizeCalculator {
    EffectSizeCalculator::with_banding(groups.banding.into())
}

/// Basic metrics only; baselines and projection from a JSON input are dropped
pub fn run_basic(groups: &GroupArgs) -> Result<ShellOutput> {
    let mut comparison = match &groups.input {
        Some(path) => load_comparison(path)?,
        None => {
            let (active, placebo) = groups_from_flags(groups);
            TrialComparison::new(active, placebo)
        }
    };
    comparison.active.baseline = None;
    comparison.placebo.baseline = None;
    comparison.project_day = None;

    let result = calculator(groups).compute(&comparison)?;
    let lines = ReportFormatter::default().lines(&result);
    debug!(lines = lines.len(), "basic report ready");

    Ok(ShellOutput {
        result,
        lines,
        export: None,
    })
}

/// Full report plus an in-memory export in the requested format
pub fn run_extended(args: &ExtendedArgs) -> Result<ShellOutput> {
    let mut comparison = match &args.groups.input {
        Some(path) => load_comparison(path)?,
        None => {
            let (mut active, mut placebo) = groups_from_flags(&args.groups);
            active.baseline = args.baseline1;
            placebo.baseline = args.baseline2;
            TrialComparison::new(active, placebo)
                .with_observation_day(args.observation_day)
                .with_project_day(args.project_day)
        }
    };
    if args.no_projection {
        comparison.project_day = None;
    }

    let result = calculator(&args.groups).compute(&comparison)?;

    let mut formatter = ReportFormatter::new(args.parameter.as_str());
    if let Some(unit) = &args.unit {
        formatter = formatter.with_unit(unit.as_str());
    }
    let lines = formatter.lines(&result);

    let exporter: Box<dyn TabularExporter> = match args.format {
        ExportFormat::Xlsx => Box::new(XlsxExporter::new()),
        ExportFormat::Csv => Box::new(CsvExporter::new()),
    };
    let export = export_report(exporter.as_ref(), &formatter.record(&result), &args.output)?;

    Ok(ShellOutput {
        result,
        lines,
        export: Some(export),
    })
}

/// Write an export into `dir`, returning the full path
pub fn write_export(export: &ReportExport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(&export.file_name);
    fs::write(&path, &export.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), size = export.bytes.len(), "wrote report");
    Ok(path)
}
