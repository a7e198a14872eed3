//! CLI argument parsing for trial-stats

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trial_core::{DEFAULT_OBSERVATION_DAY, DEFAULT_PROJECT_DAY};
use trial_effect::BandingMode;
use trial_report::DEFAULT_FILE_STEM;

/// How Cohen's d is mapped onto effect bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BandingArg {
    /// Band the signed value; negative effects are "very small"
    Signed,
    /// Band |d|, symmetric in the direction of the effect
    Absolute,
}

impl From<BandingArg> for BandingMode {
    fn from(arg: BandingArg) -> Self {
        match arg {
            BandingArg::Signed => BandingMode::Signed,
            BandingArg::Absolute => BandingMode::Absolute,
        }
    }
}

/// Spreadsheet format of the exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Office Open XML workbook
    Xlsx,
    /// Comma-separated values
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "trial-stats")]
#[command(version)]
#[command(about = "Effect size, t-test and projection for two-arm trials", long_about = None)]
pub struct Cli {
    /// Enable debug tracing output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mean difference, pooled SD, t-test and Cohen's d
    Basic(GroupArgs),
    /// Basic metrics plus percent change, projection and spreadsheet export
    Extended(ExtendedArgs),
}

/// Summary statistics of both arms, shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    /// Active group sample size
    #[arg(long, default_value_t = 20)]
    pub n1: usize,

    /// Active group mean change
    #[arg(long, default_value_t = 11.0, allow_negative_numbers = true)]
    pub mean1: f64,

    /// Active group standard deviation
    #[arg(long, default_value_t = 18.28, allow_negative_numbers = true)]
    pub sd1: f64,

    /// Placebo group sample size
    #[arg(long, default_value_t = 10)]
    pub n2: usize,

    /// Placebo group mean change
    #[arg(long, default_value_t = 1.9, allow_negative_numbers = true)]
    pub mean2: f64,

    /// Placebo group standard deviation
    #[arg(long, default_value_t = 16.22, allow_negative_numbers = true)]
    pub sd2: f64,

    /// Read the comparison (groups, baselines, days) from a JSON file; group,
    /// baseline and day flags are then ignored
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Effect size banding of Cohen's d
    #[arg(long, value_enum, default_value = "signed")]
    pub banding: BandingArg,

    /// Print the result as JSON instead of text lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExtendedArgs {
    #[command(flatten)]
    pub groups: GroupArgs,

    /// Name of the measured outcome, shown in the report
    #[arg(long, default_value = "")]
    pub parameter: String,

    /// Unit appended to the mean difference (e.g. "hairs")
    #[arg(long)]
    pub unit: Option<String>,

    /// Active group baseline mean
    #[arg(long, allow_negative_numbers = true)]
    pub baseline1: Option<f64>,

    /// Placebo group baseline mean
    #[arg(long, allow_negative_numbers = true)]
    pub baseline2: Option<f64>,

    /// Day on which the changes were observed
    #[arg(long, value_name = "DAY", default_value_t = DEFAULT_OBSERVATION_DAY)]
    pub observation_day: u32,

    /// Day to project the effect to
    #[arg(long, value_name = "DAY", default_value_t = DEFAULT_PROJECT_DAY)]
    pub project_day: u32,

    /// Skip the projection
    #[arg(long, conflicts_with = "project_day")]
    pub no_projection: bool,

    /// File name of the exported report
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_FILE_STEM)]
    pub output: String,

    /// Directory the report is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value = "xlsx")]
    pub format: ExportFormat,
}
