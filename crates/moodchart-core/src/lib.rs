//! Core types for the moodchart visualization pipeline.
//!
//! This crate provides the leaf types the pipeline is built from:
//! - Geometric primitives: [`Point`], [`Rect`]
//! - Color representation: [`Color`] with hex conversion
//! - Mood data: [`MoodRecord`] and the [`AxisRange`] scales
//! - Drawing: the [`DrawingSurface`] trait and a [`RecordingCanvas`]
//! - Styling: [`MoodPalette`] and the file-backed [`ChartConfig`]

mod axis;
mod canvas;
mod color;
mod config;
mod geometry;
mod mood;
mod theme;

pub use axis::AxisRange;
pub use canvas::{DrawCommand, DrawingSurface, RecordingCanvas, TextStyle};
pub use color::{Color, ColorParseError};
pub use config::{ChartConfig, ConfigError};
pub use geometry::{Point, Rect};
pub use mood::{MoodRecord, MoodRecordError, MOOD_CENTER, MOOD_MAX, MOOD_MIN};
pub use theme::MoodPalette;
