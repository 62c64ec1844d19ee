use crate::error::ConfigError;
use crate::patterns::PatternId;
use crate::settings::SimulationSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "torus-life";
const CONFIG_FILE_NAME: &str = "config.json";

/// Startup configuration for export/import.
///
/// Holds settings and UI choices only, never a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version field for future compatibility
    pub version: u32,
    /// Board bounds and timing limits
    pub settings: SimulationSettings,
    /// Pattern loaded on startup
    pub selected_pattern: PatternId,
    /// Auto-tick speed on the 1-100 scale
    pub tick_speed: u32,
    /// Inject a random live cell every tick
    pub random_life: bool,
}

impl AppConfig {
    /// Default location: `<config dir>/torus-life/config.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Export config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Import config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&content)?;
        config.settings = config.settings.sanitized();
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the default path, falling back to defaults when absent
    pub fn load_or_default() -> Self {
        let Ok(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            settings: SimulationSettings::default(),
            selected_pattern: PatternId::default(),
            tick_speed: 50,
            random_life: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_file_save_and_load() {
        let config = AppConfig {
            version: 1,
            settings: SimulationSettings {
                min_grid_size: 8,
                max_grid_size: 40,
                initial_grid_size: 16,
                max_tick_interval_ms: 2000,
                default_tick_interval_ms: 750,
                random_density: 0.45,
            },
            selected_pattern: PatternId::LightweightSpaceship,
            tick_speed: 72,
            random_life: true,
        };

        let temp_file = NamedTempFile::new().unwrap();
        config.save_to_file(temp_file.path()).unwrap();
        let loaded = AppConfig::load_from_file(temp_file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        AppConfig::default().save_to_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(
            temp_file.path(),
            r#"{ "selected_pattern": "glider", "settings": { "max_grid_size": 30 } }"#,
        )
        .unwrap();

        let loaded = AppConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.selected_pattern, PatternId::Glider);
        assert_eq!(loaded.settings.max_grid_size, 30);
        assert_eq!(loaded.settings.min_grid_size, 10);
        assert_eq!(loaded.tick_speed, 50);
        assert!(!loaded.random_life);
    }

    #[test]
    fn test_loaded_settings_are_sanitized() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(
            temp_file.path(),
            r#"{ "settings": { "min_grid_size": 20, "max_grid_size": 12, "initial_grid_size": 5 } }"#,
        )
        .unwrap();

        let loaded = AppConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.settings.max_grid_size, 20);
        assert_eq!(loaded.settings.initial_grid_size, 20);
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "not valid json").unwrap();

        let result = AppConfig::load_from_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = AppConfig::load_from_file(Path::new("/nonexistent/path/config.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
