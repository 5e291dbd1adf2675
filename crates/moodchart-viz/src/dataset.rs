//! UI-ready representation of a two-week window.

use chrono::{Days, NaiveDate};
use moodchart_core::{Color, MoodPalette};
use serde::{Deserialize, Serialize};

/// Number of calendar days in a visualization window.
pub const WINDOW_DAYS: usize = 14;

/// Scale used when no day carries a value, so scaling never divides by zero.
pub const DEFAULT_MAX_ABSOLUTE_VALUE: f64 = 1.0;

/// One calendar day of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayValue {
    /// Calendar date
    pub date: NaiveDate,
    /// Centered mood value, `None` for a gap
    pub value: Option<f64>,
    /// Display color for the day's point
    pub color: Color,
}

impl DayValue {
    /// A day with a value.
    #[must_use]
    pub const fn recorded(date: NaiveDate, value: f64, color: Color) -> Self {
        Self {
            date,
            value: Some(value),
            color,
        }
    }

    /// A gap day.
    #[must_use]
    pub const fn gap(date: NaiveDate, color: Color) -> Self {
        Self {
            date,
            value: None,
            color,
        }
    }

    /// Whether the day has a chartable value.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.value.is_some()
    }
}

/// Chronological day values plus the scale needed to chart them symmetrically.
///
/// Built once and then only read. Deserialization recomputes the scale from
/// the days; a serialized `max_absolute_value` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDataset")]
pub struct VisualizationDataset {
    days: Vec<DayValue>,
    max_absolute_value: f64,
}

#[derive(Deserialize)]
struct RawDataset {
    days: Vec<DayValue>,
}

impl From<RawDataset> for VisualizationDataset {
    fn from(raw: RawDataset) -> Self {
        Self::from_days(raw.days)
    }
}

impl VisualizationDataset {
    /// Wrap already-ordered days and compute the symmetric scale.
    #[must_use]
    pub fn from_days(days: Vec<DayValue>) -> Self {
        let max_absolute_value = days
            .iter()
            .filter_map(|day| day.value)
            .map(f64::abs)
            .reduce(f64::max)
            .unwrap_or(DEFAULT_MAX_ABSOLUTE_VALUE);

        Self {
            days,
            max_absolute_value,
        }
    }

    /// Consecutive days starting at `start`, colored with `palette`.
    #[must_use]
    pub fn from_values(start: NaiveDate, values: &[Option<f64>], palette: &MoodPalette) -> Self {
        let days = start
            .iter_days()
            .zip(values)
            .map(|(date, &value)| DayValue {
                date,
                value,
                color: palette.color_for(value),
            })
            .collect();
        Self::from_days(days)
    }

    /// Every day in chronological order.
    #[must_use]
    pub fn days(&self) -> &[DayValue] {
        &self.days
    }

    /// Largest `|value|` over recorded days, or the default when none is recorded.
    #[must_use]
    pub const fn max_absolute_value(&self) -> f64 {
        self.max_absolute_value
    }

    /// Number of days in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True for a dataset without any day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days that carry a value, with their index in the window.
    pub fn recorded_days(&self) -> impl Iterator<Item = (usize, &DayValue)> + Clone {
        self.days.iter().enumerate().filter(|(_, day)| day.has_data())
    }

    /// Count of days that carry a value.
    #[must_use]
    pub fn recorded_count(&self) -> usize {
        self.recorded_days().count()
    }

    /// First and last calendar date of the window.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.days.first()?.date, self.days.last()?.date))
    }
}

/// The `WINDOW_DAYS` dates ending at `end`, oldest first.
///
/// Dates that would fall before the calendar's minimum are dropped, so the
/// result is shorter than `WINDOW_DAYS` only for an `end` within two weeks of
/// `NaiveDate::MIN`.
#[must_use]
pub fn window_dates(end: NaiveDate) -> Vec<NaiveDate> {
    let span = (WINDOW_DAYS - 1) as u64;
    let start = end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
    start.iter_days().take_while(|d| *d <= end).collect()
}
