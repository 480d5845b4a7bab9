//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Daily log analyzer.
///
/// Reads a day's activity log (`HH:MM - category - task` per line) and reports the
/// time spent on each category and task.
#[derive(Debug, Parser)]
#[command(name = "dla", about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Parse the log contained in FILE, produce a report and exit.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the version of the program and exit.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Print the license of the program and exit.
    #[arg(short = 'L', long)]
    pub license: bool,

    /// Print the author of the program and exit.
    #[arg(short = 'A', long)]
    pub author: bool,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
