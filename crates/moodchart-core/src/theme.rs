//! Mood color palettes.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Colors keyed by what a chart element means.
///
/// Passed explicitly into the aggregator and renderers so hosts can theme
/// the chart and tests can inject distinctive colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodPalette {
    /// Day whose centered value is above zero
    pub improved: Color,
    /// Day whose centered value is below zero
    pub declined: Color,
    /// Day whose centered value is exactly zero
    pub neutral: Color,
    /// Day without a usable record
    pub no_data: Color,
    /// Connected trend line
    pub trend_line: Color,
    /// Week separator rules
    pub separator: Color,
    /// Day labels
    pub label: Color,
}

impl Default for MoodPalette {
    fn default() -> Self {
        Self::light()
    }
}

impl MoodPalette {
    /// Palette for light backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            improved: Color::new(0.18, 0.55, 0.34, 1.0),  // Green
            declined: Color::new(0.69, 0.18, 0.18, 1.0),  // Red
            neutral: Color::new(0.46, 0.46, 0.46, 1.0),   // Gray
            no_data: Color::new(0.82, 0.82, 0.82, 1.0),   // Light gray
            trend_line: Color::new(0.2, 0.47, 0.96, 1.0), // Blue
            separator: Color::new(0.88, 0.88, 0.88, 1.0),
            label: Color::new(0.13, 0.13, 0.13, 1.0),
        }
    }

    /// Palette for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            improved: Color::new(0.51, 0.78, 0.58, 1.0),  // Light green
            declined: Color::new(0.94, 0.47, 0.47, 1.0),  // Light red
            neutral: Color::new(0.62, 0.62, 0.62, 1.0),   // Gray
            no_data: Color::new(0.27, 0.27, 0.27, 1.0),   // Dark gray
            trend_line: Color::new(0.51, 0.71, 1.0, 1.0), // Light blue
            separator: Color::new(0.2, 0.2, 0.2, 1.0),
            label: Color::WHITE,
        }
    }

    /// Color for a centered day value; `None` means no data.
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> Color {
        match value {
            None => self.no_data,
            Some(v) if v > 0.0 => self.improved,
            Some(v) if v < 0.0 => self.declined,
            Some(_) => self.neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(MoodPalette::default(), MoodPalette::light());
        assert_ne!(MoodPalette::light(), MoodPalette::dark());
    }

    #[test]
    fn test_color_for() {
        let p = MoodPalette::light();
        assert_eq!(p.color_for(None), p.no_data);
        assert_eq!(p.color_for(Some(0.5)), p.improved);
        assert_eq!(p.color_for(Some(-0.5)), p.declined);
        assert_eq!(p.color_for(Some(0.0)), p.neutral);
        assert_eq!(p.color_for(Some(-0.0)), p.neutral);
    }

    #[test]
    fn test_partial_palette_fills_defaults() {
        let p: MoodPalette =
            serde_json::from_str(r##"{"improved":"#00FF00"}"##).expect("valid palette");
        assert_eq!(p.improved, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(p.declined, MoodPalette::light().declined);
    }
}
