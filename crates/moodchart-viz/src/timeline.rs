//! Fractional placement of timestamps along a date range.
//!
//! Positions are computed from full date-times, not just dates, so two samples
//! on the same day land at different x positions. The end of the range is
//! pulled in to the last sample when that sample falls on the end date,
//! which keeps the chart from reserving empty space after the data.
//!
//! Hosts that keep several samples per day use these fractions to place
//! points on the x axis of a [`PlotArea`](crate::PlotArea):
//!
//! ```
//! use chrono::NaiveDate;
//! use moodchart_core::Rect;
//! use moodchart_viz::{timeline, PlotArea};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date");
//! let samples = [
//!     day(1).and_hms_opt(9, 0, 0).expect("valid time"),
//!     day(2).and_hms_opt(17, 0, 0).expect("valid time"),
//! ];
//!
//! let plot = PlotArea::new(Rect::new(0.0, 0.0, 300.0, 200.0), 20.0, 2).expect("drawable");
//! let xs: Vec<f32> = timeline::positions(&samples, day(1), day(3))
//!     .into_iter()
//!     .map(|t| plot.rect().x + t as f32 * plot.rect().width)
//!     .collect();
//!
//! assert!(xs[0] > plot.rect().x && xs[1] < plot.rect().right());
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// End of the positioning range for `end_date` given the sample times.
///
/// If the latest sample falls on `end_date` that sample is the end;
/// otherwise the range ends at midnight starting `end_date`.
#[must_use]
pub fn refined_end(end_date: NaiveDate, timestamps: &[NaiveDateTime]) -> NaiveDateTime {
    let start_of_end = end_date.and_time(NaiveTime::MIN);
    match timestamps.iter().max() {
        Some(last) if last.date() == end_date => *last,
        _ => start_of_end,
    }
}

/// Position of `timestamp` between `start` and `end` as a fraction.
///
/// Returns `0.0` when the range is empty or inverted. Timestamps outside the
/// range produce values outside `0.0..=1.0`.
#[must_use]
pub fn relative_position(
    timestamp: NaiveDateTime,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> f64 {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return 0.0;
    }
    (timestamp - start).num_milliseconds() as f64 / total as f64
}

/// Date-only variant of [`relative_position`].
#[must_use]
pub fn date_position(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> f64 {
    let total = (end - start).num_days();
    if total <= 0 {
        return 0.0;
    }
    (date - start).num_days() as f64 / total as f64
}

/// Positions for every timestamp across `start_date..=end_date`, using the
/// refined end.
#[must_use]
pub fn positions(
    timestamps: &[NaiveDateTime],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<f64> {
    let start = start_date.and_time(NaiveTime::MIN);
    let end = refined_end(end_date, timestamps);
    timestamps
        .iter()
        .map(|ts| relative_position(*ts, start, end))
        .collect()
}
