//! JSON-file settings repository.
//!
//! Plays the role the browser's local storage plays for the web client: a
//! small key-value store surviving restarts. Settings live in one JSON
//! file under the platform config directory.

use std::path::{Path, PathBuf};

use curavox_core::ports::{SettingsRepository, SettingsRepositoryError};
use curavox_core::settings::{validate_settings, Settings};

/// Settings repository backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    path: PathBuf,
}

impl JsonSettingsRepository {
    /// Create a repository over an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository at the platform default location
    /// (`{config_dir}/curavox/settings.json`).
    #[must_use]
    pub fn at_default_location() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("curavox")
            .join("settings.json");
        Self { path }
    }

    /// The file this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> Result<Settings, SettingsRepositoryError> {
        if !self.path.exists() {
            return Ok(Settings::with_defaults());
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SettingsRepositoryError::Read(e.to_string()))?;
        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SettingsRepositoryError::Read(e.to_string()))?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsRepositoryError> {
        validate_settings(settings)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsRepositoryError::Write(e.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsRepositoryError::Write(e.to_string()))?;
        std::fs::write(&self.path, contents)
            .map_err(|e| SettingsRepositoryError::Write(e.to_string()))?;
        Ok(())
    }
}
