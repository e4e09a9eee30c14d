use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::filter::ScoreRange;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "movie-dashboard.json";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Start-up settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV loaded at start-up.
    pub data_path: PathBuf,
    /// Score slider bounds and step.
    pub score_min: f64,
    pub score_max: f64,
    pub score_step: f64,
    /// Score range selected when a dataset is loaded.
    pub default_score_range: [f64; 2],
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("movies.csv"),
            score_min: 1.0,
            score_max: 10.0,
            score_step: 0.1,
            default_score_range: [1.0, 2.0],
            window_size: [1200.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing config JSON")
    }

    /// Load [`CONFIG_FILE`] if it exists; defaults otherwise. A broken file is
    /// logged and ignored.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config file: {e:#}");
                Self::default()
            }
        }
    }

    /// Slider bounds, ordered even if the file swapped them.
    pub fn score_bounds(&self) -> (f64, f64) {
        let r = ScoreRange::new(self.score_min, self.score_max);
        (r.lower(), r.upper())
    }

    /// Decimal places needed to write `score_step` exactly (0.1 → 1, 0.25 → 2).
    pub fn score_decimals(&self) -> usize {
        (0..=6)
            .find(|&d| {
                let scaled = self.score_step * 10f64.powi(d as i32);
                (scaled - scaled.round()).abs() < 1e-9
            })
            .unwrap_or(6)
    }

    /// Round a slider value to the step's precision, so 5.800000000000001
    /// becomes the 5.8 the slider label shows.
    pub fn snap_score(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.score_decimals() as i32);
        (value * scale).round() / scale
    }

    /// Initial score selection, clamped to the slider bounds.
    pub fn initial_score_range(&self) -> ScoreRange {
        let (min, max) = self.score_bounds();
        let [a, b] = self.default_score_range;
        ScoreRange::new(a.clamp(min, max), b.clamp(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = DashboardConfig::from_json(r#"{ "data_path": "data/films.csv" }"#).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/films.csv"));
        assert_eq!(config.score_step, 0.1);
        assert_eq!(config.default_score_range, [1.0, 2.0]);
    }

    #[test]
    fn initial_range_is_clamped_to_slider_bounds() {
        let config = DashboardConfig {
            default_score_range: [12.0, 0.0],
            ..Default::default()
        };
        let r = config.initial_score_range();
        assert_eq!((r.lower(), r.upper()), (1.0, 10.0));
    }

    #[test]
    fn step_precision_drives_snapping() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.score_decimals(), 1);
        assert_eq!(config.snap_score(1.0 + ((5.8f64 - 1.0) / 0.1).round() * 0.1), 5.8);

        config.score_step = 0.25;
        assert_eq!(config.score_decimals(), 2);
        config.score_step = 1.0;
        assert_eq!(config.score_decimals(), 0);
        assert_eq!(config.snap_score(6.9999999), 7.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DashboardConfig::from_json("{ not json").is_err());
    }
}
