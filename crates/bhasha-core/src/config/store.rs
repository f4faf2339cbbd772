//! Settings persistence
//!
//! Settings are read once when the session starts. Nothing is written
//! unless `save` is called.

use super::settings::Settings;
use crate::error::{BhashaError, BhashaResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "bhasha-mitra";
const SETTINGS_FILE: &str = "settings.json";

/// File-backed settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config directory (`~/.config/bhasha-mitra/settings.json` on Linux)
    pub fn with_defaults() -> Self {
        let base_dir = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default()
            .join(APP_DIR);
        Self::new(base_dir.join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing or blank file yields the defaults
    pub fn load(&self) -> BhashaResult<Settings> {
        if !self.path.exists() {
            debug!("no settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            BhashaError::io_with_path(
                format!("Failed to read settings: {}", e),
                self.path.display().to_string(),
            )
        })?;

        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            BhashaError::config_with_context(
                format!("Failed to parse settings: {}", e),
                format!("Reading settings from '{}'", self.path.display()),
            )
        })
    }

    /// Load settings, then apply environment overrides
    pub fn load_with_env(&self) -> BhashaResult<Settings> {
        let mut settings = self.load()?;
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Write settings, creating parent directories if needed
    pub fn save(&self, settings: &Settings) -> BhashaResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BhashaError::io(format!("Failed to create directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| BhashaError::config(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&self.path, content).map_err(|e| {
            BhashaError::io_with_path(
                format!("Failed to write settings: {}", e),
                self.path.display().to_string(),
            )
        })?;

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::DocType;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("nope.json"));
        let settings = store.load().unwrap();
        assert!(!settings.has_api_key());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));

        let settings = Settings {
            api_key: "key-123".to_string(),
            model: "gemini-2.0-flash".to_string(),
            doc_type: DocType::Marketing,
            ..Default::default()
        };
        store.save(&settings).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.api_key, "key-123");
        assert_eq!(loaded.model, "gemini-2.0-flash");
        assert_eq!(loaded.doc_type, DocType::Marketing);
    }

    #[test]
    fn test_load_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = SettingsStore::new(&path);
        let _ = store.load().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = SettingsStore::new(&path).load().unwrap_err();
        assert!(matches!(err, BhashaError::Config { .. }));
    }
}
