//! Gap-aware line chart rendering.
//!
//! Days map to evenly spaced columns across the plot area and values map
//! symmetrically around its horizontal center line. Only days with data
//! become points; consecutive points are joined by one straight segment each,
//! so a run of gap days is spanned by a single line rather than interpolated.

use crate::dataset::{VisualizationDataset, DEFAULT_MAX_ABSOLUTE_VALUE};
use crate::layers::ChartLayer;
use moodchart_core::{ChartConfig, Color, DrawingSurface, MoodPalette, Point, Rect};

/// Pixel geometry shared by every chart layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    rect: Rect,
    columns: usize,
}

impl PlotArea {
    /// Shrink `bounds` by `margin` on every side and lay out `columns` days.
    ///
    /// Returns `None` when nothing can be drawn: no columns, or a usable area
    /// that is empty or not finite.
    #[must_use]
    pub fn new(bounds: Rect, margin: f32, columns: usize) -> Option<Self> {
        let rect = bounds.shrink(margin);
        if columns == 0 || rect.is_empty() {
            return None;
        }
        Some(Self { rect, columns })
    }

    /// The usable rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Number of day columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Horizontal distance between adjacent day columns.
    #[must_use]
    pub fn step(&self) -> f32 {
        if self.columns > 1 {
            self.rect.width / (self.columns - 1) as f32
        } else {
            0.0
        }
    }

    /// X coordinate of day `index`.
    #[must_use]
    pub fn x_for(&self, index: usize) -> f32 {
        (index as f32).mul_add(self.step(), self.rect.x)
    }

    /// Y coordinate of the zero line.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.rect.y + self.rect.height / 2.0
    }

    /// Y coordinate of `value` on a symmetric `±max_abs` scale.
    ///
    /// A non-positive or non-finite `max_abs` falls back to
    /// [`DEFAULT_MAX_ABSOLUTE_VALUE`].
    #[must_use]
    pub fn y_for(&self, value: f64, max_abs: f64) -> f32 {
        let scale = if max_abs.is_finite() && max_abs > 0.0 {
            max_abs
        } else {
            DEFAULT_MAX_ABSOLUTE_VALUE
        };
        let half_height = self.rect.height / 2.0;
        ((value / scale) as f32).mul_add(-half_height, self.center_y())
    }
}

/// A drawn segment between two data-bearing days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Window index of the earlier day
    pub from_day: usize,
    /// Window index of the later day
    pub to_day: usize,
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
}

/// Draws the connected trend line of a [`VisualizationDataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartRenderer {
    margin: f32,
    stroke_width: f32,
    color: Color,
}

impl Default for LineChartRenderer {
    fn default() -> Self {
        Self {
            margin: 20.0,
            stroke_width: 2.0,
            color: MoodPalette::default().trend_line,
        }
    }
}

impl LineChartRenderer {
    /// Renderer with a 20px margin and a 2px trend line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer matching `config`.
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new()
            .margin(config.margin)
            .stroke_width(config.stroke_width)
            .color(config.palette.trend_line)
    }

    /// Set the margin reserved on every side.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the line width.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.5);
        self
    }

    /// Set the line color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Configured margin.
    #[must_use]
    pub const fn get_margin(&self) -> f32 {
        self.margin
    }

    /// Geometry for `dataset` inside `bounds`, if anything can be drawn.
    #[must_use]
    pub fn plot_area(&self, bounds: Rect, dataset: &VisualizationDataset) -> Option<PlotArea> {
        PlotArea::new(bounds, self.margin, dataset.len())
    }

    /// Points for every data-bearing day, tagged with the day index.
    #[must_use]
    pub fn plot_points(&self, bounds: Rect, dataset: &VisualizationDataset) -> Vec<(usize, Point)> {
        self.plot_area(bounds, dataset)
            .map(|plot| points(plot, dataset).collect())
            .unwrap_or_default()
    }

    /// Segments the renderer would draw, in order.
    #[must_use]
    pub fn segments(&self, bounds: Rect, dataset: &VisualizationDataset) -> Vec<Segment> {
        self.plot_area(bounds, dataset)
            .map(|plot| {
                adjacent_pairs(points(plot, dataset))
                    .map(|((from_day, from), (to_day, to))| Segment {
                        from_day,
                        to_day,
                        from,
                        to,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Draw the trend line onto `surface`.
    ///
    /// Degenerate geometry and datasets with fewer than two recorded days
    /// leave the surface untouched.
    pub fn render(
        &self,
        surface: &mut dyn DrawingSurface,
        bounds: Rect,
        dataset: &VisualizationDataset,
    ) {
        let Some(plot) = self.plot_area(bounds, dataset) else {
            tracing::trace!(?bounds, days = dataset.len(), "trend line: nothing to plot");
            return;
        };

        let mut pairs = adjacent_pairs(points(plot, dataset)).peekable();
        if pairs.peek().is_none() {
            tracing::trace!(
                recorded = dataset.recorded_count(),
                "trend line: fewer than two points"
            );
            return;
        }

        surface.set_stroke_color(self.color);
        surface.set_stroke_width(self.stroke_width);
        for ((_, from), (_, to)) in pairs {
            surface.draw_line(from, to);
        }
    }
}

impl ChartLayer for LineChartRenderer {
    fn name(&self) -> &'static str {
        "trend_line"
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, bounds: Rect, dataset: &VisualizationDataset) {
        self.render(surface, bounds, dataset);
    }
}

/// Lazily map data-bearing days to points; restartable via `Clone`.
fn points(
    plot: PlotArea,
    dataset: &VisualizationDataset,
) -> impl Iterator<Item = (usize, Point)> + Clone + '_ {
    let max_abs = dataset.max_absolute_value();
    dataset.days().iter().enumerate().filter_map(move |(i, day)| {
        day.value
            .map(|value| (i, Point::new(plot.x_for(i), plot.y_for(value, max_abs))))
    })
}

/// Pair each item with its successor.
fn adjacent_pairs<I>(items: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: Iterator + Clone,
{
    items.clone().zip(items.skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use moodchart_core::{DrawCommand, RecordingCanvas};
    use proptest::prelude::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).expect("valid date")
    }

    fn dataset(values: &[Option<f64>]) -> VisualizationDataset {
        VisualizationDataset::from_values(start(), values, &MoodPalette::default())
    }

    fn window_with(days: &[(usize, f64)]) -> VisualizationDataset {
        let mut values = [None; 14];
        for &(i, v) in days {
            values[i] = Some(v);
        }
        dataset(&values)
    }

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 200.0)
    }

    // ===== PlotArea Tests =====

    #[test]
    fn test_plot_area_geometry() {
        let plot = PlotArea::new(bounds(), 20.0, 14).expect("drawable");
        assert_eq!(plot.rect(), Rect::new(20.0, 20.0, 260.0, 160.0));
        assert_eq!(plot.step(), 20.0);
        assert_eq!(plot.x_for(0), 20.0);
        assert_eq!(plot.x_for(13), 280.0);
        assert_eq!(plot.center_y(), 100.0);
    }

    #[test]
    fn test_plot_area_y_scaling() {
        let plot = PlotArea::new(bounds(), 20.0, 14).expect("drawable");
        assert_eq!(plot.y_for(5.0, 5.0), 20.0);
        assert_eq!(plot.y_for(-5.0, 5.0), 180.0);
        assert_eq!(plot.y_for(0.0, 5.0), 100.0);
        assert_eq!(plot.y_for(-4.0, 5.0), 164.0);
    }

    #[test]
    fn test_plot_area_non_positive_scale_uses_default() {
        let plot = PlotArea::new(bounds(), 20.0, 14).expect("drawable");
        assert_eq!(plot.y_for(0.0, 0.0), 100.0);
        assert_eq!(plot.y_for(0.0, -3.0), 100.0);
        assert_eq!(plot.y_for(1.0, f64::NAN), 20.0);
    }

    #[test]
    fn test_plot_area_rejects_degenerate() {
        assert!(PlotArea::new(Rect::new(0.0, 0.0, 0.0, 0.0), 20.0, 14).is_none());
        assert!(PlotArea::new(Rect::new(0.0, 0.0, 40.0, 200.0), 20.0, 14).is_none());
        assert!(PlotArea::new(Rect::new(0.0, 0.0, -10.0, 200.0), 0.0, 14).is_none());
        assert!(PlotArea::new(bounds(), 20.0, 0).is_none());
    }

    #[test]
    fn test_single_column_sits_at_left_edge() {
        let plot = PlotArea::new(bounds(), 20.0, 1).expect("drawable");
        assert_eq!(plot.step(), 0.0);
        assert_eq!(plot.x_for(0), 20.0);
    }

    // ===== Gap Skipping Tests =====

    #[test]
    fn test_gap_skipping_law() {
        let ds = window_with(&[(0, 1.0), (2, -1.0), (5, 2.0), (8, 0.5)]);
        let segments = LineChartRenderer::new().segments(bounds(), &ds);

        let pairs: Vec<(usize, usize)> = segments.iter().map(|s| (s.from_day, s.to_day)).collect();
        assert_eq!(pairs, vec![(0, 2), (2, 5), (5, 8)]);

        let mut canvas = RecordingCanvas::new();
        LineChartRenderer::new().render(&mut canvas, bounds(), &ds);
        assert_eq!(canvas.line_count(), 3);

        let touched_x: Vec<f32> = canvas
            .lines()
            .iter()
            .flat_map(|(a, b)| [a.x, b.x])
            .collect();
        let plot = PlotArea::new(bounds(), 20.0, 14).expect("drawable");
        for skipped in [1, 3, 4, 6, 7] {
            assert!(!touched_x.contains(&plot.x_for(skipped)));
        }
    }

    #[test]
    fn test_zero_and_one_point_draw_nothing() {
        let renderer = LineChartRenderer::new();
        for ds in [window_with(&[]), window_with(&[(6, 3.0)])] {
            let mut canvas = RecordingCanvas::new();
            renderer.render(&mut canvas, bounds(), &ds);
            assert!(canvas.is_empty());
            assert!(renderer.segments(bounds(), &ds).is_empty());
        }
    }

    #[test]
    fn test_stroke_state_set_once_before_segments() {
        let ds = window_with(&[(0, 1.0), (1, 2.0), (2, 3.0), (3, 4.0)]);
        let renderer = LineChartRenderer::new()
            .color(Color::RED)
            .stroke_width(3.0);
        let mut canvas = RecordingCanvas::new();
        renderer.render(&mut canvas, bounds(), &ds);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], DrawCommand::StrokeColor { color: Color::RED });
        assert_eq!(commands[1], DrawCommand::StrokeWidth { width: 3.0 });
        assert!(commands[2..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { color, width, .. } if *color == Color::RED && *width == 3.0)));
    }

    #[test]
    fn test_degenerate_bounds_render_nothing() {
        let ds = window_with(&[(0, 1.0), (1, 2.0)]);
        let renderer = LineChartRenderer::new();
        for rect in [
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Rect::new(0.0, 0.0, 30.0, 30.0),
            Rect::new(0.0, 0.0, f32::NAN, 100.0),
        ] {
            let mut canvas = RecordingCanvas::new();
            renderer.render(&mut canvas, rect, &ds);
            assert!(canvas.is_empty());
        }
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        let mut canvas = RecordingCanvas::new();
        LineChartRenderer::new().render(&mut canvas, bounds(), &VisualizationDataset::from_days(Vec::new()));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_all_zero_values_sit_on_center_line() {
        let ds = window_with(&[(0, 0.0), (13, 0.0)]);
        assert_eq!(ds.max_absolute_value(), 0.0);
        let points = LineChartRenderer::new().plot_points(bounds(), &ds);
        assert_eq!(points, vec![(0, Point::new(20.0, 100.0)), (13, Point::new(280.0, 100.0))]);
    }

    #[test]
    fn test_from_config() {
        let config = ChartConfig {
            margin: 10.0,
            stroke_width: 4.0,
            ..ChartConfig::default()
        };
        let renderer = LineChartRenderer::from_config(&config);
        assert_eq!(renderer.get_margin(), 10.0);
        let ds = window_with(&[(0, 1.0), (1, 1.0)]);
        let points = renderer.plot_points(bounds(), &ds);
        assert_eq!(points[0].1.x, 10.0);
    }

    #[test]
    fn test_builder_clamps() {
        let renderer = LineChartRenderer::new().margin(-5.0).stroke_width(0.0);
        assert_eq!(renderer.get_margin(), 0.0);
        assert_eq!(renderer.stroke_width, 0.5);
    }

    proptest! {
        #[test]
        fn prop_segments_follow_recorded_days(mask in proptest::collection::vec(proptest::option::of(-4.0f64..=5.0), 14)) {
            let ds = dataset(&mask);
            let segments = LineChartRenderer::new().segments(bounds(), &ds);
            let recorded: Vec<usize> = ds.recorded_days().map(|(i, _)| i).collect();

            prop_assert_eq!(segments.len(), recorded.len().saturating_sub(1));
            for (segment, pair) in segments.iter().zip(recorded.windows(2)) {
                prop_assert_eq!(segment.from_day, pair[0]);
                prop_assert_eq!(segment.to_day, pair[1]);
                prop_assert!(segment.from.x < segment.to.x);
            }
        }

        #[test]
        fn prop_points_stay_inside_plot(mask in proptest::collection::vec(proptest::option::of(-4.0f64..=5.0), 14)) {
            let ds = dataset(&mask);
            let plot = PlotArea::new(bounds(), 20.0, 14).expect("drawable");
            for (_, p) in LineChartRenderer::new().plot_points(bounds(), &ds) {
                prop_assert!(plot.rect().contains_point(&p));
            }
        }
    }
}
