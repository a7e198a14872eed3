use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trial_stats::cli::{Cli, Command};
use trial_stats::shell;

/// Initialize tracing subscriber when --debug or RUST_LOG asks for it
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Basic(groups) => {
            let output = shell::run_basic(&groups)?;
            println!("{}", output.render(groups.json)?);
        }
        Command::Extended(args) => {
            let output = shell::run_extended(&args)?;
            println!("{}", output.render(args.groups.json)?);
            if let Some(export) = &output.export {
                let path = shell::write_export(export, &args.output_dir)?;
                eprintln!("Report written to {}", path.display());
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
