//! Daily mood samples.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest value a mood can be recorded with.
pub const MOOD_MIN: u8 = 1;
/// Highest value a mood can be recorded with.
pub const MOOD_MAX: u8 = 10;
/// Offset subtracted from an average to center the 1..10 scale on zero.
pub const MOOD_CENTER: f64 = 5.0;

/// Errors raised when constructing a [`MoodRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodRecordError {
    /// A mood value fell outside `MOOD_MIN..=MOOD_MAX`.
    #[error("{field} value {value} is outside 1..=10")]
    OutOfRange {
        /// Which value was rejected
        field: &'static str,
        /// The rejected value
        value: u8,
    },
}

/// One day's mood sample.
///
/// A record without a start value counts as "not recorded": it never produces
/// a chart point. Values are validated on construction and the record is
/// read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMoodRecord")]
pub struct MoodRecord {
    date: NaiveDate,
    start_value: Option<u8>,
    end_value: Option<u8>,
}

#[derive(Deserialize)]
struct RawMoodRecord {
    date: NaiveDate,
    #[serde(default)]
    start_value: Option<u8>,
    #[serde(default)]
    end_value: Option<u8>,
}

impl TryFrom<RawMoodRecord> for MoodRecord {
    type Error = MoodRecordError;

    fn try_from(raw: RawMoodRecord) -> Result<Self, Self::Error> {
        Self::new(raw.date, raw.start_value, raw.end_value)
    }
}

impl MoodRecord {
    /// Create a record, validating that present values lie in 1..=10.
    pub fn new(
        date: NaiveDate,
        start_value: Option<u8>,
        end_value: Option<u8>,
    ) -> Result<Self, MoodRecordError> {
        check("start", start_value)?;
        check("end", end_value)?;
        Ok(Self {
            date,
            start_value,
            end_value,
        })
    }

    /// A day with no recorded mood.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            start_value: None,
            end_value: None,
        }
    }

    /// Calendar date of the sample.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Mood at the start of the day.
    #[must_use]
    pub const fn start_value(&self) -> Option<u8> {
        self.start_value
    }

    /// Mood at the end of the day.
    #[must_use]
    pub const fn end_value(&self) -> Option<u8> {
        self.end_value
    }

    /// Whether the day has a usable sample.
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        self.start_value.is_some()
    }

    /// End minus start, treating a missing end as "unchanged".
    #[must_use]
    pub fn delta(&self) -> Option<i16> {
        let start = self.start_value?;
        let end = self.end_value.unwrap_or(start);
        Some(i16::from(end) - i16::from(start))
    }

    /// Mean of start and end; a missing end falls back to the start value.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        let start = self.start_value?;
        let end = self.end_value.unwrap_or(start);
        Some((f64::from(start) + f64::from(end)) / 2.0)
    }

    /// [`average`](Self::average) shifted so the scale runs -4..=+5.
    #[must_use]
    pub fn centered_average(&self) -> Option<f64> {
        self.average().map(|avg| avg - MOOD_CENTER)
    }
}

fn check(field: &'static str, value: Option<u8>) -> Result<(), MoodRecordError> {
    match value {
        Some(v) if !(MOOD_MIN..=MOOD_MAX).contains(&v) => {
            Err(MoodRecordError::OutOfRange { field, value: v })
        }
        _ => Ok(()),
    }
}
