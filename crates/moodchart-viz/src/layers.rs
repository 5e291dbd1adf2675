//! Pluggable chart layers.
//!
//! A chart is an ordered list of independent layers, each drawing one visual
//! element over the same [`PlotArea`] geometry. The trend line itself
//! ([`LineChartRenderer`]) is one such layer.

use crate::dataset::VisualizationDataset;
use crate::renderer::{LineChartRenderer, PlotArea};
use chrono::{Datelike, Weekday};
use moodchart_core::{ChartConfig, Color, DrawingSurface, MoodPalette, Point, Rect, TextStyle};
use std::fmt;

/// One independently drawable element of a chart.
pub trait ChartLayer: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Draw onto `surface` inside `bounds`.
    ///
    /// Must not panic on degenerate bounds or sparse data; drawing nothing is
    /// the expected outcome in those cases.
    fn draw(&self, surface: &mut dyn DrawingSurface, bounds: Rect, dataset: &VisualizationDataset);
}

/// Weekday initials under each day column.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLabelLayer {
    margin: f32,
    style: TextStyle,
}

impl Default for DayLabelLayer {
    fn default() -> Self {
        Self {
            margin: 20.0,
            style: TextStyle {
                size: 10.0,
                color: MoodPalette::default().label,
            },
        }
    }
}

impl DayLabelLayer {
    /// Layer with the default margin and style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer matching `config`.
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            margin: config.margin.max(0.0),
            style: TextStyle {
                size: config.label_size,
                color: config.palette.label,
            },
        }
    }

    /// Label text for a date: the weekday's initial.
    #[must_use]
    pub fn label_for(weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "M",
            Weekday::Tue | Weekday::Thu => "T",
            Weekday::Wed => "W",
            Weekday::Fri => "F",
            Weekday::Sat | Weekday::Sun => "S",
        }
    }
}

impl ChartLayer for DayLabelLayer {
    fn name(&self) -> &'static str {
        "day_labels"
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, bounds: Rect, dataset: &VisualizationDataset) {
        let Some(plot) = PlotArea::new(bounds, self.margin, dataset.len()) else {
            return;
        };
        // Labels sit in the bottom margin, centered under each column.
        let y = plot.rect().bottom() + self.margin / 2.0;
        for (i, day) in dataset.days().iter().enumerate() {
            let text = Self::label_for(day.date.weekday());
            let x = self.style.size.mul_add(-0.3, plot.x_for(i));
            surface.draw_text(text, Point::new(x, y), &self.style);
        }
    }
}

/// Vertical rules separating calendar weeks.
///
/// A rule is drawn halfway before every Monday except the window's first day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSeparatorLayer {
    margin: f32,
    stroke_width: f32,
    color: Color,
}

impl Default for WeekSeparatorLayer {
    fn default() -> Self {
        Self {
            margin: 20.0,
            stroke_width: 1.0,
            color: MoodPalette::default().separator,
        }
    }
}

impl WeekSeparatorLayer {
    /// Layer with the default margin and color.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer matching `config`.
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            margin: config.margin.max(0.0),
            color: config.palette.separator,
            ..Self::default()
        }
    }

    /// X positions of the separators for `dataset` on `plot`.
    #[must_use]
    pub fn separator_xs(plot: &PlotArea, dataset: &VisualizationDataset) -> Vec<f32> {
        dataset
            .days()
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, day)| day.date.weekday() == Weekday::Mon)
            .map(|(i, _)| plot.x_for(i) - plot.step() / 2.0)
            .collect()
    }
}

impl ChartLayer for WeekSeparatorLayer {
    fn name(&self) -> &'static str {
        "week_separators"
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, bounds: Rect, dataset: &VisualizationDataset) {
        let Some(plot) = PlotArea::new(bounds, self.margin, dataset.len()) else {
            return;
        };
        let xs = Self::separator_xs(&plot, dataset);
        if xs.is_empty() {
            return;
        }

        let rect = plot.rect();
        surface.set_stroke_color(self.color);
        surface.set_stroke_width(self.stroke_width);
        for x in xs {
            surface.draw_line(Point::new(x, rect.y), Point::new(x, rect.bottom()));
        }
    }
}

/// Layers drawn in order, first to last.
#[derive(Default)]
pub struct ChartComposition {
    layers: Vec<Box<dyn ChartLayer>>,
}

impl fmt::Debug for ChartComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.layers.iter().map(|layer| layer.name()))
            .finish()
    }
}

impl ChartComposition {
    /// Empty composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Separators, then the trend line, then day labels, per `config`.
    #[must_use]
    pub fn standard(config: &ChartConfig) -> Self {
        let mut composition = Self::new();
        if config.show_week_separators {
            composition.push(WeekSeparatorLayer::from_config(config));
        }
        composition.push(LineChartRenderer::from_config(config));
        if config.show_day_labels {
            composition.push(DayLabelLayer::from_config(config));
        }
        composition
    }

    /// Append a layer (builder form).
    #[must_use]
    pub fn with_layer(mut self, layer: impl ChartLayer + 'static) -> Self {
        self.push(layer);
        self
    }

    /// Append a layer.
    pub fn push(&mut self, layer: impl ChartLayer + 'static) {
        self.layers.push(Box::new(layer));
    }

    /// Layer names in draw order.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True without layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ChartLayer for ChartComposition {
    fn name(&self) -> &'static str {
        "composition"
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, bounds: Rect, dataset: &VisualizationDataset) {
        for layer in &self.layers {
            layer.draw(surface, bounds, dataset);
        }
    }
}
