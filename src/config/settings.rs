//! Configuration settings for breathe.
//!
//! Settings are loaded from `~/.breathe/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::BreatheError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Store connection settings.
    pub server: ServerConfig,
    /// Stopwatch settings.
    pub stopwatch: StopwatchConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the global `colored` override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Where the Store lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Server root, e.g. `http://localhost:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix of the record routes.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Per-request timeout. Unset means a hung request never resolves.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Stopwatch sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwatchConfig {
    /// Tick period and increment in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

const fn default_tick_ms() -> u64 {
    10
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            timeout_secs: None,
        }
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, BreatheError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, BreatheError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BreatheError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            BreatheError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the stopwatch cannot run with.
    fn validate(&self) -> Result<(), BreatheError> {
        if self.stopwatch.tick_ms == 0 {
            return Err(BreatheError::Config(
                "stopwatch.tick_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert_eq!(config.server.api_prefix, "/api");
        assert!(config.server.timeout_secs.is_none());
        assert_eq!(config.stopwatch.tick_ms, 10);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        let yaml = r"
general:
  default_output: json
  color: never
server:
  base_url: http://breath.local:8080
  api_prefix: /v1
  timeout_secs: 5
stopwatch:
  tick_ms: 20
";
        std::fs::write(&config_path, yaml).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.general.default_output, OutputFormat::Json);
        assert_eq!(loaded.general.color, ColorSetting::Never);
        assert_eq!(loaded.server.base_url, "http://breath.local:8080");
        assert_eq!(loaded.server.api_prefix, "/v1");
        assert_eq!(loaded.server.timeout_secs, Some(5));
        assert_eq!(loaded.stopwatch.tick_ms, 20);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
server:
  base_url: http://10.0.0.2:5000
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.server.base_url, "http://10.0.0.2:5000");
        // Defaults should be used for missing fields
        assert_eq!(config.server.api_prefix, "/api");
        assert_eq!(config.stopwatch.tick_ms, 10);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "stopwatch:\n  tick_ms: 0\n").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }
}
