//! Settings persistence port.
//!
//! Abstracts the key-value preference store (browser `localStorage`, a JSON
//! file, or an in-memory map in tests).

use thiserror::Error;

use crate::settings::{Settings, SettingsError};

/// Errors returned by settings persistence.
#[derive(Debug, Error)]
pub enum SettingsRepositoryError {
    /// The store could not be read.
    #[error("Failed to read settings: {0}")]
    Read(String),

    /// The store could not be written.
    #[error("Failed to write settings: {0}")]
    Write(String),

    /// Stored settings failed validation.
    #[error("Stored settings are invalid: {0}")]
    Invalid(#[from] SettingsError),
}

/// Port trait for loading and saving user settings.
pub trait SettingsRepository: Send + Sync {
    /// Load settings, returning defaults when nothing is stored yet.
    fn load(&self) -> Result<Settings, SettingsRepositoryError>;

    /// Persist the given settings.
    fn save(&self, settings: &Settings) -> Result<(), SettingsRepositoryError>;
}
