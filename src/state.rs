use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::svg::{render_svg, SvgOptions};
use crate::chart::ChartRenderer;
use crate::color::SeriesColors;
use crate::config::ChartConfig;
use crate::data::filter::{parse_cutoff, FilterKey};
use crate::data::loader;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ChartConfig,

    /// Resolved bar colours.
    pub colors: SeriesColors,

    /// Chart over the loaded dataset (None until a file loads).
    pub chart: Option<ChartRenderer>,

    /// Contents of the cutoff text box.
    pub cutoff_input: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl AppState {
    pub fn new(config: ChartConfig) -> Self {
        let colors = config.colors().unwrap_or_else(|e| {
            log::warn!("{e}; using default series colours");
            SeriesColors::default()
        });
        Self {
            config,
            colors,
            chart: None,
            cutoff_input: "0".to_string(),
            status_message: None,
        }
    }

    /// Load a CSV file and show every country. On failure the previous
    /// chart (if any) stays and the error is surfaced in the status line.
    pub fn load_path(&mut self, path: &Path, now: f64) {
        match loader::load_file(path) {
            Ok(dataset) => self.set_dataset(dataset, now),
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load data: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and draw it unfiltered.
    pub fn set_dataset(&mut self, dataset: Dataset, now: f64) {
        if dataset.is_empty() {
            log::warn!("Dataset has no rows; the chart will stay empty");
        }
        let mut chart = ChartRenderer::new(dataset, self.config.layout(), self.config.duration());
        chart.render(FilterKey::All, 0.0, now);
        self.chart = Some(chart);
        self.status_message = None;
    }

    /// Continent selector changed. Always redraws with a cutoff of 0,
    /// whatever the cutoff box holds.
    pub fn select_continent(&mut self, filter: FilterKey, now: f64) {
        let Some(chart) = self.chart.as_mut() else {
            log::warn!("Continent '{filter}' selected before any data loaded");
            return;
        };
        log::info!("Showing continent '{filter}'");
        chart.render(filter, 0.0, now);
    }

    /// "Filter Data" clicked: keep the current continent, apply the typed
    /// cutoff. Text that is not a number hides every country.
    pub fn apply_cutoff(&mut self, now: f64) {
        let Some(chart) = self.chart.as_mut() else {
            log::warn!("Filter requested before any data loaded");
            return;
        };
        let cutoff = parse_cutoff(&self.cutoff_input);
        if cutoff.is_nan() {
            log::warn!("Cutoff {:?} is not a number; no country passes", self.cutoff_input);
        }
        let filter = chart.view().filter.clone();
        let diff = chart.render(filter, cutoff, now);
        log::info!(
            "Cutoff {cutoff}: {} countries visible",
            diff.entered.len() + diff.retained.len()
        );
    }

    /// Continents for the selector, after the "all" entry.
    pub fn continents(&self) -> &[String] {
        self.chart
            .as_ref()
            .map(|c| c.dataset().continents.as_slice())
            .unwrap_or(&[])
    }

    /// Selector entries: the "all" sentinel, then one key per continent.
    /// Continent names become keys verbatim, so a continent literally named
    /// "all" stays distinct from the sentinel.
    pub fn selector_options(&self) -> Vec<FilterKey> {
        std::iter::once(FilterKey::All)
            .chain(
                self.continents()
                    .iter()
                    .map(|name| FilterKey::Continent(name.clone())),
            )
            .collect()
    }

    /// Settled chart as an SVG document.
    pub fn svg(&self) -> Option<String> {
        let chart = self.chart.as_ref()?;
        let opts = SvgOptions {
            title: &self.config.title,
            axis_ticks: self.config.axis_ticks,
            colors: self.colors,
        };
        Some(render_svg(chart, &opts))
    }

    pub fn export_svg(&self, path: &Path) -> Result<()> {
        let svg = self.svg().context("no chart to export")?;
        std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported chart to {}", path.display());
        Ok(())
    }
}
