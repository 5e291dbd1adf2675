//! Chart configuration.
//!
//! A [`ChartConfig`] can be written as YAML, TOML or JSON. Every field has a
//! default, so a file only needs to name what it overrides:
//!
//! ```yaml
//! margin: 24
//! palette:
//!   trend_line: "#3366FF"
//! ```

use crate::theme::MoodPalette;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a [`ChartConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML syntax or shape error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one of yaml, yml, toml or json.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A value parsed but is not usable.
    #[error("Invalid value for '{field}': {message}")]
    Invalid {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

/// Layout and styling knobs for the two-week chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Blank space reserved on every side of the chart, in pixels
    pub margin: f32,
    /// Trend line width, in pixels
    pub stroke_width: f32,
    /// Font size for day labels
    pub label_size: f32,
    /// Draw a weekday initial under each day
    pub show_day_labels: bool,
    /// Draw a rule between weeks
    pub show_week_separators: bool,
    /// Colors
    pub palette: MoodPalette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            stroke_width: 2.0,
            label_size: 10.0,
            show_day_labels: true,
            show_week_separators: true,
            palette: MoodPalette::default(),
        }
    }
}

impl ChartConfig {
    /// Parse from YAML and validate.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(source)?;
        config.validate()
    }

    /// Parse from TOML and validate.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()
    }

    /// Parse from JSON and validate.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()
    }

    /// Load a file, choosing the parser by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str,
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        let source = std::fs::read_to_string(path)?;
        let config = parse(&source)?;
        tracing::debug!(path = %path.display(), "loaded chart config");
        Ok(config)
    }

    /// Load a file, falling back to defaults (with a warning) on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using default chart config");
                Self::default()
            }
        }
    }

    /// Reject values the renderer cannot use.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::Invalid {
                field: "margin",
                message: format!("must be a finite non-negative number, got {}", self.margin),
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "stroke_width",
                message: format!("must be positive, got {}", self.stroke_width),
            });
        }
        if !self.label_size.is_finite() || self.label_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "label_size",
                message: format!("must be positive, got {}", self.label_size),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_default_values() {
        let config = ChartConfig::default();
        assert_eq!(config.margin, 20.0);
        assert_eq!(config.stroke_width, 2.0);
        assert!(config.show_day_labels);
        assert!(config.show_week_separators);
        assert_eq!(config.palette, MoodPalette::light());
    }

    // ===== Format Tests =====

    #[test]
    fn test_from_yaml_partial() {
        let yaml = "margin: 24\npalette:\n  trend_line: \"#3366FF\"\n";
        let config = ChartConfig::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(config.margin, 24.0);
        assert_eq!(config.stroke_width, 2.0);
        assert_eq!(
            config.palette.trend_line,
            Color::from_hex("#3366FF").expect("valid hex")
        );
        assert_eq!(config.palette.improved, MoodPalette::light().improved);
    }

    #[test]
    fn test_from_toml() {
        let toml = "stroke_width = 3.5\nshow_day_labels = false\n\n[palette]\ndeclined = \"#FF0000\"\n";
        let config = ChartConfig::from_toml_str(toml).expect("valid toml");
        assert_eq!(config.stroke_width, 3.5);
        assert!(!config.show_day_labels);
        assert_eq!(config.palette.declined, Color::RED);
    }

    #[test]
    fn test_from_json_round_trip() {
        let original = ChartConfig {
            margin: 12.0,
            palette: MoodPalette::dark(),
            ..ChartConfig::default()
        };
        let json = serde_json::to_string(&original).expect("serialize");
        let parsed = ChartConfig::from_json_str(&json).expect("valid json");
        assert_eq!(parsed.margin, 12.0);
        assert_eq!(parsed.palette.label, Color::WHITE);
    }

    // ===== Validation Tests =====

    #[test]
    fn test_rejects_negative_margin() {
        let err = ChartConfig::from_yaml_str("margin: -1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'margin': must be a finite non-negative number, got -1"
        );
    }

    #[test]
    fn test_rejects_zero_stroke_width() {
        let err = ChartConfig::from_json_str(r#"{"stroke_width":0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "stroke_width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = ChartConfig::from_yaml_str("palette:\n  improved: \"#zz\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    // ===== File Tests =====

    #[test]
    fn test_from_path_unsupported_extension() {
        let err = ChartConfig::from_path("chart.ini").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ChartConfig::from_path("/nonexistent/moodchart/chart.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = std::env::temp_dir().join(format!("moodchart-config-{}.toml", std::process::id()));
        std::fs::write(&path, "margin = 8.0\n").expect("write temp config");
        let config = ChartConfig::from_path(&path).expect("valid file");
        std::fs::remove_file(&path).ok();
        assert_eq!(config.margin, 8.0);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = ChartConfig::load_or_default("/nonexistent/moodchart/chart.yaml");
        assert_eq!(config, ChartConfig::default());
    }
}
