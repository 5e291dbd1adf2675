//! Display strings for list views and summaries.

use crate::dataset::{DayValue, VisualizationDataset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative bucket for a centered day value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeLabel {
    /// Day has no value
    NoData,
    /// value >= 2.0
    SignificantlyImproved,
    /// value >= 1.0
    ModeratelyImproved,
    /// value >= 0.1
    SlightlyImproved,
    /// value == 0.0
    NoChange,
    /// value > -1.0
    SlightlyDeclined,
    /// value > -2.0
    ModeratelyDeclined,
    /// Everything lower
    SignificantlyDeclined,
}

impl ChangeLabel {
    /// Bucket a value; the first matching band wins, top to bottom.
    ///
    /// Values strictly between 0.0 and 0.1 fall through to
    /// [`SlightlyDeclined`](Self::SlightlyDeclined) and `NaN` fails every
    /// comparison; centered averages are multiples of 0.5 so neither occurs
    /// in aggregated data.
    #[must_use]
    pub fn from_value(value: Option<f64>) -> Self {
        let Some(v) = value else {
            return Self::NoData;
        };
        if v >= 2.0 {
            Self::SignificantlyImproved
        } else if v >= 1.0 {
            Self::ModeratelyImproved
        } else if v >= 0.1 {
            Self::SlightlyImproved
        } else if v == 0.0 {
            Self::NoChange
        } else if v > -1.0 {
            Self::SlightlyDeclined
        } else if v > -2.0 {
            Self::ModeratelyDeclined
        } else {
            Self::SignificantlyDeclined
        }
    }

    /// Human-readable text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoData => "No data",
            Self::SignificantlyImproved => "Significantly improved",
            Self::ModeratelyImproved => "Moderately improved",
            Self::SlightlyImproved => "Slightly improved",
            Self::NoChange => "No change",
            Self::SlightlyDeclined => "Slightly declined",
            Self::ModeratelyDeclined => "Moderately declined",
            Self::SignificantlyDeclined => "Significantly declined",
        }
    }
}

impl fmt::Display for ChangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text for one row of a day list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDescription {
    /// Full weekday name, e.g. "Monday"
    pub day_of_week: String,
    /// Uppercase `#RRGGBB`
    pub color_hex: String,
    /// Qualitative change bucket
    pub change: ChangeLabel,
}

/// Direction of the window's trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Fewer than two recorded days
    Insufficient,
    /// Last recorded value above the first
    Improving,
    /// Last recorded value below the first
    Declining,
    /// First and last recorded values equal
    Steady,
}

impl Trend {
    /// Compare the first and last recorded values of `dataset`.
    #[must_use]
    pub fn of(dataset: &VisualizationDataset) -> Self {
        let mut values = dataset.days().iter().filter_map(|day| day.value);
        let Some(first) = values.next() else {
            return Self::Insufficient;
        };
        let Some(last) = values.last() else {
            return Self::Insufficient;
        };
        if last > first {
            Self::Improving
        } else if last < first {
            Self::Declining
        } else {
            Self::Steady
        }
    }
}

/// Stateless formatter for dataset display strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualizationFormatter;

impl VisualizationFormatter {
    /// Create a formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Describe a single day.
    #[must_use]
    pub fn describe_day(&self, day: &DayValue) -> DayDescription {
        DayDescription {
            day_of_week: day.date.format("%A").to_string(),
            color_hex: day.color.to_hex(),
            change: ChangeLabel::from_value(day.value),
        }
    }

    /// Describe every day of the window, in order.
    #[must_use]
    pub fn describe_all(&self, dataset: &VisualizationDataset) -> Vec<DayDescription> {
        dataset
            .days()
            .iter()
            .map(|day| self.describe_day(day))
            .collect()
    }

    /// One-line narrative of the window.
    #[must_use]
    pub fn summarize(&self, dataset: &VisualizationDataset) -> String {
        let Some((first, last)) = dataset.date_range() else {
            return "No days to summarize".to_string();
        };

        let recorded = dataset.recorded_count();
        let total = dataset.len();
        let range = format!("{} to {}", first.format("%b %-d"), last.format("%b %-d, %Y"));
        let trend = match Trend::of(dataset) {
            Trend::Insufficient => "not enough data for a trend",
            Trend::Improving => "mood improving",
            Trend::Declining => "mood declining",
            Trend::Steady => "mood steady",
        };

        format!("Recorded {recorded} of {total} days from {range}; {trend}")
    }
}
