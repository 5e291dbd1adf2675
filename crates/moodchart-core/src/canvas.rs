//! Drawing surface abstraction and a recording implementation.
//!
//! Chart code only needs an immediate-mode surface with a stroke state and
//! straight lines. Anything that can set a stroke color, set a stroke width
//! and draw a line implements [`DrawingSurface`]; text is optional.

use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Text style for labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
        }
    }
}

/// Minimal 2D immediate-mode drawing interface.
pub trait DrawingSurface {
    /// Set the color used by subsequent strokes.
    fn set_stroke_color(&mut self, color: Color);

    /// Set the width in pixels used by subsequent strokes.
    fn set_stroke_width(&mut self, width: f32);

    /// Stroke a straight line with the current stroke state.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Draw text anchored at `position`.
    ///
    /// Surfaces without text support can ignore this.
    fn draw_text(&mut self, _text: &str, _position: Point, _style: &TextStyle) {}
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Stroke color change
    StrokeColor {
        /// New stroke color
        color: Color,
    },
    /// Stroke width change
    StrokeWidth {
        /// New stroke width
        width: f32,
    },
    /// Straight line stroked with the stroke state in effect at record time
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color at record time
        color: Color,
        /// Stroke width at record time
        width: f32,
    },
    /// Text label
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

/// A surface that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (ship a draw list to a platform canvas)
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    stroke_color: Color,
    stroke_width: f32,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current stroke color.
    #[must_use]
    pub const fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Current stroke width.
    #[must_use]
    pub const fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Endpoints of every recorded line, in draw order.
    #[must_use]
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
            .count()
    }

    /// Every recorded text label with its anchor.
    #[must_use]
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text {
                    content, position, ..
                } => Some((content.as_str(), *position)),
                _ => None,
            })
            .collect()
    }

    /// Clear all recorded commands and reset the stroke state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl DrawingSurface for RecordingCanvas {
    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.commands.push(DrawCommand::StrokeColor { color });
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
        self.commands.push(DrawCommand::StrokeWidth { width });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.stroke_color,
            width: self.stroke_width,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}
