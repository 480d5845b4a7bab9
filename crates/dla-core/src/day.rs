//! Tasks and the day that owns them.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Serialize, Serializer};

/// Serializes a duration as whole seconds.
pub(crate) fn serialize_secs<S>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(duration.num_seconds())
}

/// A single activity from the log, bounded by its own start and the next line's start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    category: String,
    name: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    #[serde(rename = "duration_secs", serialize_with = "serialize_secs")]
    duration: TimeDelta,
}

impl Task {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            start_time,
            end_time,
            duration: end_time - start_time,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub const fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }
}

/// Everything parsed out of one log file.
///
/// `day_end_time` is the start of the last line in the log, not its end: the format has
/// no end-of-day marker, so the final entry never contributes to `duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub date_is_accurate: bool,
    pub day_start_time: NaiveDateTime,
    pub day_end_time: NaiveDateTime,
    pub tasks: Vec<Task>,
}

impl Day {
    /// Time between the first and the last line of the log.
    pub fn duration(&self) -> TimeDelta {
        self.day_end_time - self.day_start_time
    }
}
