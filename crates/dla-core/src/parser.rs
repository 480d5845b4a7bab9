//! Line-by-line parsing of a daily log into a [`Day`].
//!
//! Each content line has the form `HH:MM - category - task name`. A line only marks
//! where its task *starts*; the task ends when the next line starts, so every line but
//! the last one produces a [`Task`].

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::date::{InferredDate, guess_date, is_date_tag};
use crate::{Day, LogError, ParseError, ParseErrorKind, Task};

/// Separator between the time, category and task name fields.
pub const FIELD_SEPARATOR: &str = " - ";

const TIME_FORMAT: &str = "%H:%M";

/// A line that has been read but whose end time is not known yet.
struct PendingTask<'a> {
    start: NaiveDateTime,
    category: &'a str,
    name: &'a str,
}

/// Splits a content line into time, category and name.
///
/// The name keeps any further separators, since the split stops after three fields.
fn split_line(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(time), Some(category), Some(name)) => Some((time, category.trim(), name.trim())),
        _ => None,
    }
}

fn parse_time(value: &str, date: NaiveDate, line: usize) -> Result<NaiveDateTime, ParseError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map(|time| date.and_time(time))
        .map_err(|_| ParseError::new(line, ParseErrorKind::InvalidTime))
}

/// Parses log text whose date has already been inferred.
///
/// Date tag lines are skipped wherever they appear. Fails on the first malformed or
/// out-of-order line.
pub fn parse_log(content: &str, inferred: InferredDate) -> Result<Day, LogError> {
    let mut tasks = Vec::new();
    let mut pending: Option<PendingTask<'_>> = None;
    let mut day_start_time = None;
    let mut day_end_time: Option<NaiveDateTime> = None;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        if is_date_tag(line) {
            continue;
        }

        let (time, category, name) = split_line(line)
            .ok_or_else(|| ParseError::new(line_number, ParseErrorKind::Format))?;
        let start = parse_time(time, inferred.date, line_number)?;

        if day_end_time.is_some_and(|end| start < end) {
            return Err(ParseError::new(line_number, ParseErrorKind::OutOfOrder).into());
        }

        if let Some(previous) = pending.take() {
            tasks.push(Task::new(previous.category, previous.name, previous.start, start));
        }

        day_start_time.get_or_insert(start);
        day_end_time = Some(start);
        pending = Some(PendingTask {
            start,
            category,
            name,
        });
    }

    let (Some(day_start_time), Some(day_end_time)) = (day_start_time, day_end_time) else {
        return Err(LogError::Empty);
    };

    tracing::debug!(
        tasks = tasks.len(),
        start = %day_start_time.time(),
        end = %day_end_time.time(),
        "parsed daily log"
    );

    Ok(Day {
        date: inferred.date,
        date_is_accurate: inferred.accurate,
        day_start_time,
        day_end_time,
        tasks,
    })
}

/// Infers the date of the log at `path`, then reads and parses the whole file.
///
/// Logs written in a legacy encoding are decoded lossily instead of failing.
pub fn parse_file(path: &Path) -> Result<Day, LogError> {
    let inferred = guess_date(path)?;
    let bytes = fs::read(path).map_err(|source| LogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_log(&String::from_utf8_lossy(&bytes), inferred)
}
