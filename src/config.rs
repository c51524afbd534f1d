use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::layout::{Layout, Padding};
use crate::color::{ColorError, SeriesColors};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "HOUSING_BURDEN_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "housing-burden.json";

// ---------------------------------------------------------------------------
// Chart configuration
// ---------------------------------------------------------------------------

/// Display name and colour of one bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub label: String,
    pub color: String,
}

/// Everything tunable about the chart. Missing fields take their defaults,
/// so an empty `{}` file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data_path: PathBuf,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    /// Number of bands the chart height is divided into.
    pub bands: usize,
    /// Gap between the baseline and the top of a country label.
    pub label_offset: f64,
    pub transition_ms: u64,
    pub axis_ticks: usize,
    pub series_a: SeriesConfig,
    pub series_b: SeriesConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("housing_cost.csv"),
            title: "Housing Burden (%)".to_string(),
            width: 1000.0,
            height: 960.0,
            padding: Padding::default(),
            bands: 20,
            label_offset: 15.0,
            transition_ms: 500,
            axis_ticks: 10,
            series_a: SeriesConfig {
                label: "2015".to_string(),
                color: "purple".to_string(),
            },
            series_b: SeriesConfig {
                label: "2022".to_string(),
                color: "darkblue".to_string(),
            },
        }
    }
}

impl ChartConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ChartConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Config from `$HOUSING_BURDEN_CONFIG`, else `./housing-burden.json` if
    /// present, else defaults. A broken file is logged and ignored.
    pub fn discover() -> Self {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    log::debug!("No {DEFAULT_CONFIG_FILE}, using default chart config");
                    return Self::default();
                }
                local
            }
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded chart config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring chart config: {e:#}");
                Self::default()
            }
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::new(
            self.width,
            self.height,
            self.padding,
            self.bands,
            self.label_offset,
        )
    }

    /// Transition length in seconds.
    pub fn duration(&self) -> f64 {
        self.transition_ms as f64 / 1000.0
    }

    pub fn colors(&self) -> Result<SeriesColors, ColorError> {
        SeriesColors::from_names(&self.series_a.color, &self.series_b.color)
    }
}
