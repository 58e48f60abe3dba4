use anyhow::{Context, Result};
use calitrack_types::Split;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_rest_presets() -> Vec<u64> {
    vec![30, 60, 90]
}

/// User defaults, loaded from `<data-dir>/config.toml`. Every key is
/// optional; a missing file means stock defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preselected split for `log` and `progress`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_split: Option<Split>,

    /// When true, `log` behaves as if `--replace` was always passed.
    #[serde(default)]
    pub replace_same_day: bool,

    /// Rest timer shortcut durations, in seconds.
    #[serde(default = "default_rest_presets")]
    pub rest_presets: Vec<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_split: None,
            replace_same_day: false,
            rest_presets: default_rest_presets(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml")).unwrap();

        assert!(config.default_split.is_none());
        assert!(!config.replace_same_day);
        assert_eq!(config.rest_presets, vec![30, 60, 90]);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            default_split: Some(Split::Push),
            replace_same_day: true,
            rest_presets: vec![45, 90],
        };

        config.save_to(&config_path).unwrap();
        let loaded = Config::load_from(&config_path).unwrap();

        assert_eq!(loaded.default_split, Some(Split::Push));
        assert!(loaded.replace_same_day);
        assert_eq!(loaded.rest_presets, vec![45, 90]);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "replace_same_day = true\n").unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert!(loaded.replace_same_day);
        assert_eq!(loaded.rest_presets, vec![30, 60, 90]);
    }
}
