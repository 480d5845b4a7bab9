//! Report rendering for a parsed daily log.
//!
//! The text report lists every category with its total, the tasks under it, and the
//! day's start, end and duration. The JSON report carries the same data plus the raw
//! task timeline.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use chrono::TimeDelta;
use dla_core::{CategorySummary, Day, Task, summarize};
use serde::Serialize;

use crate::config::OutputFormat;

const SECS_PER_DAY: i64 = 86_400;

// ========== Duration Formatting ==========

/// Formats a duration as `H:MM:SS`.
///
/// Spans of a day or more get a `N day(s), ` prefix. Negative spans borrow whole days,
/// so -60s renders as `-1 day, 23:59:00`.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let days = total.div_euclid(SECS_PER_DAY);
    let rest = total.rem_euclid(SECS_PER_DAY);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}

// ========== Text Output ==========

/// Formats the human-readable report.
pub fn format_report(day: &Day, categories: &[CategorySummary]) -> String {
    let mut output = String::new();

    if day.date_is_accurate {
        writeln!(output, "Daily log for {}", day.date.format("%d %B %Y (%A)")).unwrap();
    } else {
        writeln!(output, "Daily log").unwrap();
    }
    writeln!(output).unwrap();

    for category in categories {
        writeln!(
            output,
            "{} ({}):",
            category.name,
            format_duration(category.total_duration)
        )
        .unwrap();
        for task in &category.tasks {
            writeln!(output, "  - {} ({})", task.name, format_duration(task.duration)).unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(output, "Day start time : {}", day.day_start_time.format("%H:%M")).unwrap();
    writeln!(output, "Day end time   : {}", day.day_end_time.format("%H:%M")).unwrap();
    writeln!(output, "Day duration   : {}", format_duration(day.duration())).unwrap();

    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub date: String,
    pub date_is_accurate: bool,
    pub day_start: String,
    pub day_end: String,
    pub duration: String,
    pub duration_secs: i64,
    pub categories: &'a [CategorySummary],
    pub tasks: &'a [Task],
}

/// Formats the report as pretty-printed JSON.
pub fn format_report_json(day: &Day, categories: &[CategorySummary]) -> Result<String> {
    let report = JsonReport {
        date: day.date.format("%Y-%m-%d").to_string(),
        date_is_accurate: day.date_is_accurate,
        day_start: day.day_start_time.format("%H:%M").to_string(),
        day_end: day.day_end_time.format("%H:%M").to_string(),
        duration: format_duration(day.duration()),
        duration_secs: day.duration().num_seconds(),
        categories,
        tasks: &day.tasks,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Public Interface ==========

/// Parses the log at `path` and renders it in the requested format.
pub fn generate(path: &Path, format: OutputFormat) -> Result<String> {
    let day = dla_core::parse_file(path)?;
    let categories = summarize(&day.tasks);
    tracing::debug!(categories = categories.len(), ?format, "rendering report");

    match format {
        OutputFormat::Text => Ok(format_report(&day, &categories)),
        OutputFormat::Json => format_report_json(&day, &categories),
    }
}

/// Runs the report for a single log file, writing it to stdout.
pub fn run(path: &Path, format: OutputFormat) -> Result<()> {
    let output = generate(path, format)?;

    match format {
        OutputFormat::Text => {
            println!();
            print!("{output}");
        }
        OutputFormat::Json => println!("{output}"),
    }

    Ok(())
}
