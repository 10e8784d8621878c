//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. A missing file
//! yields defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::zones::validation::parse_bpm;
use crate::zones::ZoneInput;

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Threshold values used to prefill the calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteDefaults {
    /// Threshold pace, "mm:ss" per km
    pub threshold_pace: String,
    /// Threshold heart rate in bpm
    pub threshold_hr: Option<f64>,
    /// Maximum heart rate in bpm
    pub max_hr: Option<f64>,
}

impl AthleteDefaults {
    /// Defaults captured from form input. Heart rates that are not a
    /// finite positive number are left unset.
    pub fn from_input(input: &ZoneInput) -> Self {
        Self {
            threshold_pace: input.threshold_pace.trim().to_string(),
            threshold_hr: parse_bpm(&input.threshold_hr),
            max_hr: parse_bpm(&input.max_hr),
        }
    }

    /// Raw form input prefilled from these defaults.
    pub fn to_input(&self) -> ZoneInput {
        ZoneInput::new(
            self.threshold_pace.clone(),
            self.threshold_hr.map(|v| v.to_string()).unwrap_or_default(),
            self.max_hr.map(|v| v.to_string()).unwrap_or_default(),
        )
    }
}

/// Export-related settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory for exported workbooks (None = downloads folder)
    pub directory: Option<PathBuf>,
}

impl ExportSettings {
    /// Resolve the export directory: configured path, then the user's
    /// download folder, then the current directory.
    pub fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.directory {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme preference
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_scale: 1.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Form defaults
    pub defaults: AthleteDefaults,
    /// Export settings
    pub export: ExportSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            defaults: AthleteDefaults::default(),
            export: ExportSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "rustzones", "RustZones")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from a specific file. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a specific file, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved configuration to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
