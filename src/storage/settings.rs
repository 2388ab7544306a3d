//! Settings storage
//!
//! Manages persistence of application settings.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Mock endpoint used for reconciliation and publishing
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Remote endpoint: GET lists quotes, POST publishes one
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Seconds between two reconciliations with the remote endpoint
    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,
    /// Fill an empty collection with the built-in quotes on load
    #[serde(default = "default_true")]
    pub seed_when_empty: bool,
    /// Send newly added quotes to the remote endpoint
    #[serde(default = "default_true")]
    pub publish_on_add: bool,
    /// How long a banner notice stays visible
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_sync_interval() -> u64 {
    30
}

fn default_notification_secs() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            sync_interval_secs: default_sync_interval(),
            seed_when_empty: true,
            publish_on_add: true,
            notification_secs: default_notification_secs(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        self.sync_interval_secs = self.sync_interval_secs.clamp(5, 3600);
        self.notification_secs = self.notification_secs.clamp(1, 60);

        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            tracing::warn!("Invalid api_url {:?}, using default", self.api_url);
            self.api_url = default_api_url();
        } else if url.len() != self.api_url.len() {
            self.api_url = url.to_string();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            tracing::warn!("Failed to locate settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load settings from a specific file, falling back to defaults
pub fn load_settings_from(path: &Path) -> AppSettings {
    match load_settings_internal(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
///
/// A missing file is created with the defaults so they can be edited by hand.
fn load_settings_internal(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, writing defaults");
        let settings = AppSettings::default();
        if let Err(e) = save_settings_to(path, &settings) {
            tracing::warn!("Failed to write default settings: {}", e);
        }
        return Ok(settings);
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to a specific file
fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.sync_interval_secs, 30);
        assert_eq!(settings.notification_secs, 5);
        assert!(settings.seed_when_empty);
        assert!(settings.publish_on_add);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.sync_interval_secs = 0;
        settings.validate();
        assert_eq!(settings.sync_interval_secs, 5);

        settings.sync_interval_secs = 100_000;
        settings.validate();
        assert_eq!(settings.sync_interval_secs, 3600);

        settings.notification_secs = 0;
        settings.validate();
        assert_eq!(settings.notification_secs, 1);

        settings.api_url = "ftp://example.com".to_string();
        settings.validate();
        assert_eq!(settings.api_url, DEFAULT_API_URL);

        settings.api_url = "  http://localhost:8080/posts ".to_string();
        settings.validate();
        assert_eq!(settings.api_url, "http://localhost:8080/posts");
    }

    #[test]
    fn test_settings_persistence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("settings.json");

        let settings = AppSettings {
            sync_interval_secs: 60,
            seed_when_empty: false,
            ..AppSettings::default()
        };
        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("QuoteBox").join("settings.json");

        assert_eq!(load_settings_from(&path), AppSettings::default());
        assert!(path.exists());

        let written: AppSettings =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, AppSettings::default());
    }

    #[test]
    fn test_missing_file_in_unwritable_location_still_loads() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let path = blocker.join("settings.json");
        assert_eq!(load_settings_from(&path), AppSettings::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"sync_interval_secs": 45}"#).unwrap();

        let loaded = load_settings_from(&path);
        assert_eq!(loaded.sync_interval_secs, 45);
        assert_eq!(loaded.api_url, DEFAULT_API_URL);
        assert!(loaded.publish_on_add);
    }

    #[test]
    fn test_corrupted_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings_from(&path), AppSettings::default());
    }
}
