use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "SCATTER_CONFIG";

/// Layout and text settings for the chart. Every field has a default, so a
/// config file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Drawing surface width in pixels.
    pub width: f32,
    /// Drawing surface height in pixels.
    pub height: f32,
    /// Pixel span both axes map onto.
    pub pixel_range: [f64; 2],
    /// Added on each side of the fertility-rate domain.
    pub x_padding: f64,
    /// Added on each side of the life-expectancy domain.
    pub y_padding: f64,
    /// Marker radius for the smallest and largest population.
    pub radius_range: [f64; 2],
    /// Marker fill as `#rrggbb`.
    pub marker_color: String,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    /// Year shown after loading; falls back to the first year in the data.
    pub initial_year: Option<i32>,
    pub title: String,
    pub x_caption: String,
    pub y_caption: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            pixel_range: [50.0, 450.0],
            x_padding: 0.5,
            y_padding: 5.0,
            radius_range: [3.0, 20.0],
            marker_color: "#4286f4".to_string(),
            tick_count: 10,
            initial_year: Some(1960),
            title: "Countries by Life Expectancy and Fertility Rate".to_string(),
            x_caption: "Fertility Rates (Avg Children per Woman)".to_string(),
            y_caption: "Life Expectancy (years)".to_string(),
        }
    }
}

impl ChartConfig {
    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Config from `$SCATTER_CONFIG` if set, defaults otherwise.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r##"{{"marker_color": "#ff0000", "initial_year": 2000}}"##).unwrap();
        file.flush().unwrap();

        let config = ChartConfig::from_file(file.path()).unwrap();
        assert_eq!(config.marker_color, "#ff0000");
        assert_eq!(config.initial_year, Some(2000));
        assert_eq!(config.pixel_range, [50.0, 450.0]);
        assert_eq!(config.radius_range, [3.0, 20.0]);
    }

    #[test]
    fn test_bad_config_reports_path() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();
        file.flush().unwrap();

        let err = ChartConfig::from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
