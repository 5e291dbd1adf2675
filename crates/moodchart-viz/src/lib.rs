//! Two-week mood visualization pipeline.
//!
//! ```text
//! MoodDataSource ─▶ VisualizationAggregator ─▶ VisualizationDataset
//!                                                 ├─▶ VisualizationFormatter (list text, summary)
//!                                                 └─▶ ChartComposition / LineChartRenderer ─▶ DrawingSurface
//! ```
//!
//! Everything here is a pure function of its inputs: no shared state, no I/O,
//! no locking. Call the renderers from whichever thread owns the surface.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use moodchart_core::{MoodRecord, RecordingCanvas, Rect};
//! use moodchart_viz::{LineChartRenderer, VisualizationAggregator};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 14).expect("valid date");
//! let records = [
//!     MoodRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"), Some(4), None)
//!         .expect("valid record"),
//!     MoodRecord::new(today, Some(8), Some(9)).expect("valid record"),
//! ];
//!
//! let dataset = VisualizationAggregator::default().aggregate(&records, today);
//! let mut canvas = RecordingCanvas::new();
//! LineChartRenderer::new().render(&mut canvas, Rect::new(0.0, 0.0, 300.0, 200.0), &dataset);
//! assert_eq!(canvas.line_count(), 1);
//! ```

mod aggregator;
mod dataset;
mod formatter;
mod layers;
mod renderer;
mod service;
mod source;
pub mod timeline;

pub use aggregator::VisualizationAggregator;
pub use dataset::{
    window_dates, DayValue, VisualizationDataset, DEFAULT_MAX_ABSOLUTE_VALUE, WINDOW_DAYS,
};
pub use formatter::{ChangeLabel, DayDescription, Trend, VisualizationFormatter};
pub use layers::{ChartComposition, ChartLayer, DayLabelLayer, WeekSeparatorLayer};
pub use renderer::{LineChartRenderer, PlotArea, Segment};
pub use service::{MoodChart, MoodChartService};
pub use source::{InMemoryMoodStore, MoodDataSource, SourceError};
