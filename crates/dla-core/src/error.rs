//! Error types for log parsing.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// What went wrong on a particular line of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line does not split into time, category and name.
    Format,
    /// The line starts before the line preceding it.
    OutOfOrder,
    /// The time field is not a valid `HH:MM` value.
    InvalidTime,
}

impl ParseErrorKind {
    /// User-facing message for this kind of error.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Format => "There is a file format error",
            Self::OutOfOrder => "Last task's start time is earlier than the task before it",
            Self::InvalidTime => "Invalid time of day",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A fatal error tied to a 1-based line number.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Oops! {kind} on line {line}.")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub const fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Errors produced while turning a log file into a [`Day`](crate::Day).
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened or read.
    #[error("Oops. Are you sure that the file you wanted to open ({}) exists?", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the log is malformed or out of order.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The log has no task lines at all.
    #[error("Oops! The log contains no entries.")]
    Empty,
}
