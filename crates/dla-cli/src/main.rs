use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use clap::error::ErrorKind;
use dla_core::LogError;
use tracing_subscriber::EnvFilter;

use dla_cli::exit::info_message;
use dla_cli::{Cli, Config, Exit, OutputFormat, report};

/// Load config and produce the report for a single log file.
fn run(cli: &Cli, file: &Path) -> Result<()> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let path = config.resolve_log_path(file);
    tracing::debug!(path = %path.display(), "analyzing log");

    report::run(&path, format)
}

fn main() -> ExitCode {
    let parsed = Cli::command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches).map(|cli| (matches, cli)));
    let (matches, cli) = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Exit::Success.into(),
                _ => Exit::Usage.into(),
            };
        }
    };

    // Initialize tracing with verbose flag support; stdout is reserved for the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Some((exit, message)) = info_message(&matches) {
        println!("{message}");
        return exit.into();
    }

    let Some(file) = cli.file.as_deref() else {
        let _ = Cli::command().print_help();
        println!();
        return Exit::Usage.into();
    };

    match run(&cli, file) {
        Ok(()) => Exit::Success.into(),
        Err(err) => {
            let exit = Exit::for_error(&err);
            match err.downcast_ref::<LogError>() {
                Some(log_error) => println!("{log_error}"),
                None => eprintln!("Error: {err:#}"),
            }
            exit.into()
        }
    }
}
