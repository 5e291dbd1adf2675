//! Integration tests for moodchart-core.
//!
//! These tests verify the public API works correctly end-to-end.

use chrono::NaiveDate;
use moodchart_core::{
    AxisRange, ChartConfig, Color, DrawCommand, DrawingSurface, MoodPalette, MoodRecord, Point,
    RecordingCanvas, Rect,
};

// =============================================================================
// Mood Record Integration Tests
// =============================================================================

#[test]
fn test_centered_values_fit_average_axis() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    for start in 1..=10u8 {
        for end in 1..=10u8 {
            let record = MoodRecord::new(date, Some(start), Some(end)).expect("valid record");
            let centered = record.centered_average().expect("recorded");
            assert!(AxisRange::AVERAGE.contains_f64(centered));
            let delta = record.delta().expect("recorded");
            assert!(AxisRange::IMPACT.contains(i32::from(delta)));
        }
    }
}

#[test]
fn test_records_load_from_json_list() {
    let json = r#"[
        {"date": "2024-01-01", "start_value": 3, "end_value": 6},
        {"date": "2024-01-02"},
        {"date": "2024-01-03", "start_value": 9}
    ]"#;
    let records: Vec<MoodRecord> = serde_json::from_str(json).expect("valid records");
    assert_eq!(records.len(), 3);
    assert!(records[0].is_recorded());
    assert!(!records[1].is_recorded());
    assert_eq!(records[2].centered_average(), Some(4.0));
}

// =============================================================================
// Palette and Config Integration Tests
// =============================================================================

#[test]
fn test_palette_colors_render_as_hex() {
    let palette = MoodPalette::light();
    for color in [palette.improved, palette.declined, palette.neutral] {
        let hex = color.to_hex();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert_eq!(hex, hex.to_ascii_uppercase());
    }
}

#[test]
fn test_config_yaml_and_toml_agree() {
    let yaml = ChartConfig::from_yaml_str("margin: 16\nstroke_width: 1.5\n").expect("yaml");
    let toml = ChartConfig::from_toml_str("margin = 16.0\nstroke_width = 1.5\n").expect("toml");
    assert_eq!(yaml, toml);
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

#[test]
fn test_recorded_commands_serialize() {
    let mut canvas = RecordingCanvas::new();
    canvas.set_stroke_color(Color::BLUE);
    canvas.draw_line(Point::new(0.0, 0.0), Point::new(4.0, 3.0));

    let json = serde_json::to_string(canvas.commands()).expect("serialize");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, canvas.commands());
}

#[test]
fn test_plot_area_from_margin() {
    let plot = Rect::new(0.0, 0.0, 300.0, 200.0).shrink(20.0);
    assert_eq!(plot.center(), Point::new(150.0, 100.0));
    assert!(Rect::new(0.0, 0.0, 40.0, 40.0).shrink(20.0).is_empty());
}
