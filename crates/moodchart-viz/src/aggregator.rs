//! Mood records to chart dataset.

use crate::dataset::{window_dates, DayValue, VisualizationDataset};
use chrono::NaiveDate;
use moodchart_core::{MoodPalette, MoodRecord};
use std::collections::HashMap;

/// Builds a [`VisualizationDataset`] from daily mood records.
///
/// Records are matched to window days by date, never by position, so a
/// source that omits days or returns them out of order still lines up.
#[derive(Debug, Clone, Default)]
pub struct VisualizationAggregator {
    palette: MoodPalette,
}

impl VisualizationAggregator {
    /// Aggregator coloring days with `palette`.
    #[must_use]
    pub const fn new(palette: MoodPalette) -> Self {
        Self { palette }
    }

    /// The palette used for day colors.
    #[must_use]
    pub const fn palette(&self) -> &MoodPalette {
        &self.palette
    }

    /// Build the dataset for the window ending at `window_end` (inclusive).
    ///
    /// Days without a matching record, or whose record has no start value,
    /// become gaps. Records outside the window are ignored; when two records
    /// share a date the later one in `records` wins.
    #[must_use]
    pub fn aggregate(&self, records: &[MoodRecord], window_end: NaiveDate) -> VisualizationDataset {
        let dates = window_dates(window_end);
        let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
            return VisualizationDataset::from_days(Vec::new());
        };

        let by_date: HashMap<NaiveDate, &MoodRecord> = records
            .iter()
            .filter(|record| (first..=last).contains(&record.date()))
            .map(|record| (record.date(), record))
            .collect();

        let days: Vec<DayValue> = dates
            .into_iter()
            .map(|date| {
                let value = by_date
                    .get(&date)
                    .and_then(|record| record.centered_average());
                DayValue {
                    date,
                    value,
                    color: self.palette.color_for(value),
                }
            })
            .collect();

        let dataset = VisualizationDataset::from_days(days);
        tracing::debug!(
            window_end = %window_end,
            records = records.len(),
            matched = by_date.len(),
            recorded = dataset.recorded_count(),
            max_abs = dataset.max_absolute_value(),
            "aggregated mood window"
        );
        dataset
    }
}
