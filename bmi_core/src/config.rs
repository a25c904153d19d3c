//! Configuration file support for Bmical.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bmical/config.toml`.
//! Every section and key is optional; missing values fall back to the
//! defaults below.

use crate::{Error, Result, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub units: UnitsConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Unit system defaults
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UnitsConfig {
    /// Unit system used when no flag is given
    #[serde(default)]
    pub default: UnitSystem,
}

/// Export destination configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the CSV export is written to
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

/// Display tuning for the interactive session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows shown by the history listing
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

// Default value functions
fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join("Downloads")
    })
}

fn default_history_limit() -> usize {
    10
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("bmical").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.units.default, UnitSystem::Metric);
        assert_eq!(config.display.history_limit, 10);
        assert!(!config.export.dir.as_os_str().is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            units: UnitsConfig {
                default: UnitSystem::Imperial,
            },
            ..Config::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.units.default, UnitSystem::Imperial);
        assert_eq!(parsed.display.history_limit, config.display.history_limit);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
history_limit = 25
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.history_limit, 25);
        assert_eq!(config.units.default, UnitSystem::Metric); // default
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config {
            units: UnitsConfig {
                default: UnitSystem::Imperial,
            },
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.units.default, UnitSystem::Imperial);
    }
}
