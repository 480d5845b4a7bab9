//! Inferring which calendar day a log describes.
//!
//! Sources are tried in order:
//! 1. A `Date:` / `Tarih:` tag on the first line of the file
//! 2. A `YYYY-MM-DD` pattern anywhere in the file path
//! 3. Today's local date, flagged as inaccurate

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::LogError;

/// Recognized date tag prefixes, compared against the lowercased line.
const DATE_TAGS: [&str; 2] = ["date:", "tarih:"];

const DATE_FORMAT: &str = "%Y-%m-%d";

static PATH_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap());

/// A date together with whether it came from the log itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferredDate {
    pub date: NaiveDate,
    /// False only when the date fell back to today.
    pub accurate: bool,
}

/// Returns true if the line is a date tag, whatever its value.
pub fn is_date_tag(line: &str) -> bool {
    let normalized = line.trim().to_lowercase();
    DATE_TAGS.iter().any(|tag| normalized.starts_with(tag))
}

/// Parses the value of a date tag line.
///
/// Returns `None` for lines that are not tags and for tags with a malformed value.
pub fn parse_date_tag(line: &str) -> Option<NaiveDate> {
    if !is_date_tag(line) {
        return None;
    }
    let value = line.trim().split(':').nth(1)?.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Extracts the first `YYYY-MM-DD` substring of the path, if it is a real date.
pub fn date_from_path(path: &Path) -> Option<NaiveDate> {
    let path = path.to_string_lossy();
    let found = PATH_DATE_RE.find(&path)?;
    NaiveDate::parse_from_str(found.as_str(), DATE_FORMAT).ok()
}

/// Decides the log's date from its first line and path, falling back to `today`.
pub fn infer_date(first_line: Option<&str>, path: &Path, today: NaiveDate) -> InferredDate {
    if let Some(date) = first_line.and_then(parse_date_tag) {
        tracing::debug!(%date, "date taken from tag");
        return InferredDate {
            date,
            accurate: true,
        };
    }

    if let Some(date) = date_from_path(path) {
        tracing::debug!(%date, path = %path.display(), "date taken from file name");
        return InferredDate {
            date,
            accurate: true,
        };
    }

    tracing::debug!(%today, "no date found, using today");
    InferredDate {
        date: today,
        accurate: false,
    }
}

/// Reads only the first line of `path` and infers the log's date.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn guess_date(path: &Path) -> Result<InferredDate, LogError> {
    let read_error = |source| LogError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut buf = Vec::new();
    let read = BufReader::new(file)
        .read_until(b'\n', &mut buf)
        .map_err(read_error)?;
    let first_line = (read > 0).then(|| String::from_utf8_lossy(&buf).into_owned());

    Ok(infer_date(
        first_line.as_deref(),
        path,
        Local::now().date_naive(),
    ))
}
