//! Fetch, aggregate, format and render in one call.

use crate::aggregator::VisualizationAggregator;
use crate::dataset::{VisualizationDataset, WINDOW_DAYS};
use crate::formatter::{DayDescription, VisualizationFormatter};
use crate::layers::{ChartComposition, ChartLayer};
use crate::source::{MoodDataSource, SourceError};
use moodchart_core::{ChartConfig, DrawingSurface, Rect};

/// Entry point for a host view-model.
#[derive(Debug, Clone, Default)]
pub struct MoodChartService {
    config: ChartConfig,
    aggregator: VisualizationAggregator,
    formatter: VisualizationFormatter,
}

impl MoodChartService {
    /// Service styled by `config`.
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        let aggregator = VisualizationAggregator::new(config.palette.clone());
        Self {
            config,
            aggregator,
            formatter: VisualizationFormatter::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Pull the latest window from `source` and prepare everything the view shows.
    pub fn load(&self, source: &dyn MoodDataSource) -> Result<MoodChart, SourceError> {
        let today = source.today();
        let records = source.fetch_recent_records(WINDOW_DAYS)?;
        tracing::debug!(%today, fetched = records.len(), "loading mood chart");

        let dataset = self.aggregator.aggregate(&records, today);
        Ok(self.present(dataset))
    }

    /// Prepare an already-built dataset for display.
    #[must_use]
    pub fn present(&self, dataset: VisualizationDataset) -> MoodChart {
        MoodChart {
            descriptions: self.formatter.describe_all(&dataset),
            summary: self.formatter.summarize(&dataset),
            composition: ChartComposition::standard(&self.config),
            dataset,
        }
    }
}

/// Everything a view needs for one two-week window.
#[derive(Debug)]
pub struct MoodChart {
    dataset: VisualizationDataset,
    descriptions: Vec<DayDescription>,
    summary: String,
    composition: ChartComposition,
}

impl MoodChart {
    /// The aggregated window.
    #[must_use]
    pub const fn dataset(&self) -> &VisualizationDataset {
        &self.dataset
    }

    /// One description per day, oldest first.
    #[must_use]
    pub fn descriptions(&self) -> &[DayDescription] {
        &self.descriptions
    }

    /// Narrative summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Draw all configured layers inside `bounds`.
    pub fn render(&self, surface: &mut dyn DrawingSurface, bounds: Rect) {
        self.composition.draw(surface, bounds, &self.dataset);
    }
}
