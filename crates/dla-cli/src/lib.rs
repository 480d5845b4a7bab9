//! Daily log analyzer CLI library.
//!
//! This crate provides the CLI interface for the daily log analyzer.

mod cli;
pub mod config;
pub mod exit;
pub mod report;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use exit::Exit;
