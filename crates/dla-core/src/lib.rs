//! Core logic for the daily log analyzer.
//!
//! This crate contains the fundamental types and logic for:
//! - Date inference: working out which day a log describes
//! - Parsing: turning `HH:MM - category - task` lines into a [`Day`] of [`Task`]s
//! - Summaries: grouping a day's tasks by category and name

pub mod date;
mod day;
mod error;
pub mod parser;
mod summary;

pub use date::{InferredDate, guess_date};
pub use day::{Day, Task};
pub use error::{LogError, ParseError, ParseErrorKind};
pub use parser::{parse_file, parse_log};
pub use summary::{CategorySummary, TaskSummary, summarize};
