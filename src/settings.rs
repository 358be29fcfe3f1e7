//! # Settings Module
//!
//! JSON-based settings persistence for the mini calendar.
//!
//! ## Responsibilities:
//! - Load settings at startup, falling back to defaults on any error
//! - Save settings after every mutation (settings dialog, resize, hide)
//!
//! ## Lifecycle:
//! Loaded once in `main`, owned by the app, mutated only on the UI thread.
//! A malformed or missing file is never fatal: the app logs a warning and
//! starts from defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file name, stored directly in the user's home directory
const SETTINGS_FILE: &str = ".mini-calendar-settings.json";

/// Errors that can occur while persisting settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to write settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persisted application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dark theme flag (false = light theme)
    pub dark_mode: bool,

    /// Last window size in logical pixels (None until the user resizes)
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,

    /// Last auto-fitted grid dimensions (None until the first resize)
    pub grid_cols: Option<usize>,
    pub grid_rows: Option<usize>,

    /// Enabled holiday keys (see `calendar::holidays::HOLIDAYS`)
    pub holidays: Vec<String>,

    /// Per-country stripe colors, keyed by country code, as "#RRGGBB"
    pub holiday_colors: BTreeMap<String, String>,

    /// Whether the app registers itself for login autostart
    pub autostart: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let mut holiday_colors = BTreeMap::new();
        holiday_colors.insert("CH".to_string(), "#FF0000".to_string());
        holiday_colors.insert("DE".to_string(), "#FFD700".to_string());
        holiday_colors.insert("CN".to_string(), "#4CAF50".to_string());

        Self {
            dark_mode: false,
            window_width: None,
            window_height: None,
            grid_cols: None,
            grid_rows: None,
            holidays: Vec::new(),
            holiday_colors,
            autostart: false,
        }
    }
}

impl Settings {
    /// Default path of the settings file in the user's home directory
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::home_dir()
            .map(|home| home.join(SETTINGS_FILE))
            .ok_or(SettingsError::NoHomeDir)
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("⚠️ {e}, using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from an explicit path, falling back to defaults
    pub fn load_from(path: &std::path::Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("⚠️ Malformed settings file {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("⚠️ Could not read settings file {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Persist settings to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::default_path()?)
    }

    /// Persist settings to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        log::info!("💾 Saved settings to {}", path.display());
        Ok(())
    }

    /// Stripe color for a country code, falling back to neutral gray
    pub fn holiday_color(&self, country_code: &str) -> &str {
        self.holiday_colors
            .get(country_code)
            .map(String::as_str)
            .unwrap_or("#888888")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.dark_mode = true;
        settings.window_width = Some(900.0);
        settings.window_height = Some(400.0);
        settings.grid_cols = Some(3);
        settings.grid_rows = Some(2);
        settings.holidays = vec!["ch_neujahr".to_string(), "cn_spring_festival".to_string()];
        settings.autostart = true;

        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("does-not-exist.json"));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not valid json").unwrap();
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"dark_mode": true}"#).unwrap();
        let loaded = Settings::load_from(&path);
        assert!(loaded.dark_mode);
        assert_eq!(loaded.holiday_colors, Settings::default().holiday_colors);
    }

    #[test]
    fn test_holiday_color_fallback() {
        let settings = Settings::default();
        assert_eq!(settings.holiday_color("CH"), "#FF0000");
        assert_eq!(settings.holiday_color("XX"), "#888888");
    }
}
