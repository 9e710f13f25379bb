//! Pipeline Configuration
//!
//! Loads tracking/config.yml; a missing or unreadable file falls back to
//! the built-in defaults so the pipeline always has a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Minimum reported cost for a row to qualify as a lead.
/// Overridable via tracking/config.yml (observed values 0-50000
/// across product revisions).
pub const DEFAULT_MIN_LEAD_VALUE: f64 = 50_000.0;

/// Initial display window size
pub const DEFAULT_WINDOW_INITIAL: usize = 50;

/// Rows added per "show more" step
pub const DEFAULT_WINDOW_STEP: usize = 50;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_min_lead_value")]
    pub min_lead_value: f64,
    #[serde(default = "default_window_initial")]
    pub window_initial: usize,
    #[serde(default = "default_window_step")]
    pub window_step: usize,
}

fn default_min_lead_value() -> f64 {
    DEFAULT_MIN_LEAD_VALUE
}

fn default_window_initial() -> usize {
    DEFAULT_WINDOW_INITIAL
}

fn default_window_step() -> usize {
    DEFAULT_WINDOW_STEP
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_lead_value: DEFAULT_MIN_LEAD_VALUE,
            window_initial: DEFAULT_WINDOW_INITIAL,
            window_step: DEFAULT_WINDOW_STEP,
        }
    }
}

/// Load configuration from tracking/config.yml under `root`.
/// Missing file yields defaults; unparsable YAML also degrades to defaults.
pub fn load_config(root: &str) -> Result<Config> {
    let path = PathBuf::from(root).join("tracking/config.yml");

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;

    let config: Config = serde_yaml::from_str(&content).unwrap_or_default();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.min_lead_value, DEFAULT_MIN_LEAD_VALUE);
        assert_eq!(config.window_initial, DEFAULT_WINDOW_INITIAL);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let tracking = dir.path().join("tracking");
        fs::create_dir_all(&tracking).unwrap();
        fs::write(tracking.join("config.yml"), "min_lead_value: 2000\n").unwrap();

        let config = load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.min_lead_value, 2000.0);
        assert_eq!(config.window_step, DEFAULT_WINDOW_STEP);
    }

    #[test]
    fn test_corrupt_config_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let tracking = dir.path().join("tracking");
        fs::create_dir_all(&tracking).unwrap();
        fs::write(tracking.join("config.yml"), ": not yaml [").unwrap();

        let config = load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.min_lead_value, DEFAULT_MIN_LEAD_VALUE);
    }
}
