//! Storage module for configuration.

pub mod config;

pub use config::{
    load_config, save_config, AppConfig, AthleteDefaults, ConfigError, ExportSettings, Theme,
    UiSettings,
};
