//! Data-access seam for mood records.

use chrono::{Days, NaiveDate};
use moodchart_core::MoodRecord;
use thiserror::Error;

/// Errors a data source can report.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be read.
    #[error("mood store unavailable: {0}")]
    Unavailable(String),

    /// A stored record failed validation.
    #[error("invalid mood record: {0}")]
    InvalidRecord(#[from] moodchart_core::MoodRecordError),

    /// The caller asked for an empty window.
    #[error("window size must be at least one day")]
    EmptyWindow,
}

/// Supplies the records for the most recent calendar days.
///
/// Persistence lives outside this crate; hosts implement this trait over
/// whatever store they use.
pub trait MoodDataSource {
    /// Last day of the window (usually "today" in the user's time zone).
    fn today(&self) -> NaiveDate;

    /// Records for the `window_size_days` days ending at [`today`](Self::today),
    /// oldest first. Days without a record are simply absent.
    fn fetch_recent_records(
        &self,
        window_size_days: usize,
    ) -> Result<Vec<MoodRecord>, SourceError>;
}

/// A `Vec`-backed source with a fixed reference date.
#[derive(Debug, Clone)]
pub struct InMemoryMoodStore {
    today: NaiveDate,
    records: Vec<MoodRecord>,
}

impl InMemoryMoodStore {
    /// Empty store whose window ends at `today`.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            today,
            records: Vec::new(),
        }
    }

    /// Add a record (builder form).
    #[must_use]
    pub fn with_record(mut self, record: MoodRecord) -> Self {
        self.insert(record);
        self
    }

    /// Add a record, replacing any existing record for the same date.
    pub fn insert(&mut self, record: MoodRecord) {
        self.records.retain(|r| r.date() != record.date());
        self.records.push(record);
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True without records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Extend<MoodRecord> for InMemoryMoodStore {
    fn extend<T: IntoIterator<Item = MoodRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl MoodDataSource for InMemoryMoodStore {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn fetch_recent_records(
        &self,
        window_size_days: usize,
    ) -> Result<Vec<MoodRecord>, SourceError> {
        if window_size_days == 0 {
            return Err(SourceError::EmptyWindow);
        }
        let first = window_start(self.today, window_size_days);
        let mut records: Vec<MoodRecord> = self
            .records
            .iter()
            .filter(|r| r.date() >= first && r.date() <= self.today)
            .copied()
            .collect();
        records.sort_by_key(MoodRecord::date);
        Ok(records)
    }
}

/// First date of a `days`-long window ending at `end`.
fn window_start(end: NaiveDate, days: usize) -> NaiveDate {
    let back = u64::try_from(days.saturating_sub(1)).unwrap_or(u64::MAX);
    end.checked_sub_days(Days::new(back))
        .unwrap_or(NaiveDate::MIN)
}
