//! Settings domain types and validation.
//!
//! Pure domain types with no infrastructure dependencies; persistence goes
//! through the [`crate::ports::SettingsRepository`] port.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bounded length of the spoken-command history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

/// Default recognition/synthesis locale.
pub const DEFAULT_LOCALE: &str = "en-US";

/// User-facing voice settings.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Speech synthesis rate (0.1–10.0, 1.0 = normal).
    pub speech_rate: Option<f32>,

    /// Speech synthesis pitch (0.0–2.0, 1.0 = normal).
    pub speech_pitch: Option<f32>,

    /// Speech synthesis volume (0.0–1.0).
    pub speech_volume: Option<f32>,

    /// Recognition/synthesis locale (BCP 47 tag, e.g. "en-US").
    pub locale: Option<String>,

    /// Maximum number of transcripts retained in the command history (1–100).
    pub history_capacity: Option<usize>,

    /// Whether spoken feedback is enabled (captions are always shown).
    pub voice_feedback: Option<bool>,

    /// Base URL of the medicine search backend.
    pub api_base_url: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            speech_rate: Some(1.0),
            speech_pitch: Some(1.0),
            speech_volume: Some(1.0),
            locale: Some(DEFAULT_LOCALE.to_string()),
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
            voice_feedback: Some(true),
            api_base_url: None,
        }
    }

    /// Get the effective speech rate (with default fallback).
    #[must_use]
    pub fn effective_speech_rate(&self) -> f32 {
        self.speech_rate.unwrap_or(1.0)
    }

    /// Get the effective speech pitch (with default fallback).
    #[must_use]
    pub fn effective_speech_pitch(&self) -> f32 {
        self.speech_pitch.unwrap_or(1.0)
    }

    /// Get the effective speech volume (with default fallback).
    #[must_use]
    pub fn effective_speech_volume(&self) -> f32 {
        self.speech_volume.unwrap_or(1.0)
    }

    /// Get the effective history capacity (with default fallback).
    #[must_use]
    pub fn effective_history_capacity(&self) -> usize {
        self.history_capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }

    /// Get the effective locale (with default fallback).
    #[must_use]
    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Whether spoken feedback is enabled (default: on).
    #[must_use]
    pub fn voice_feedback_enabled(&self) -> bool {
        self.voice_feedback.unwrap_or(true)
    }

    /// Merge an update into this settings value, only touching `Some` fields.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(rate) = other.speech_rate {
            self.speech_rate = rate;
        }
        if let Some(pitch) = other.speech_pitch {
            self.speech_pitch = pitch;
        }
        if let Some(volume) = other.speech_volume {
            self.speech_volume = volume;
        }
        if let Some(ref locale) = other.locale {
            self.locale.clone_from(locale);
        }
        if let Some(capacity) = other.history_capacity {
            self.history_capacity = capacity;
        }
        if let Some(feedback) = other.voice_feedback {
            self.voice_feedback = feedback;
        }
        if let Some(ref url) = other.api_base_url {
            self.api_base_url.clone_from(url);
        }
    }
}

/// Partial settings update.
///
/// Each field uses `Option<Option<T>>`: the outer `None` means "leave
/// unchanged", `Some(None)` resets the field to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SettingsUpdate {
    /// Update the speech rate.
    pub speech_rate: Option<Option<f32>>,
    /// Update the speech pitch.
    pub speech_pitch: Option<Option<f32>>,
    /// Update the speech volume.
    pub speech_volume: Option<Option<f32>>,
    /// Update the locale.
    pub locale: Option<Option<String>>,
    /// Update the history capacity.
    pub history_capacity: Option<Option<usize>>,
    /// Update the voice feedback toggle.
    pub voice_feedback: Option<Option<bool>>,
    /// Update the backend base URL.
    pub api_base_url: Option<Option<String>>,
}

/// Settings validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// Speech rate outside the synthesizer's accepted range.
    #[error("Speech rate must be between 0.1 and 10.0 (got {0})")]
    InvalidRate(String),

    /// Speech pitch outside the synthesizer's accepted range.
    #[error("Speech pitch must be between 0.0 and 2.0 (got {0})")]
    InvalidPitch(String),

    /// Speech volume outside 0–1.
    #[error("Speech volume must be between 0.0 and 1.0 (got {0})")]
    InvalidVolume(String),

    /// History capacity outside the supported bounds.
    #[error("History capacity must be between 1 and 100 (got {0})")]
    InvalidHistoryCapacity(usize),

    /// Empty locale tag.
    #[error("Locale must not be empty")]
    EmptyLocale,
}

/// Validate a settings value, returning the first violation found.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(rate) = settings.speech_rate {
        if !(0.1..=10.0).contains(&rate) {
            return Err(SettingsError::InvalidRate(rate.to_string()));
        }
    }
    if let Some(pitch) = settings.speech_pitch {
        if !(0.0..=2.0).contains(&pitch) {
            return Err(SettingsError::InvalidPitch(pitch.to_string()));
        }
    }
    if let Some(volume) = settings.speech_volume {
        if !(0.0..=1.0).contains(&volume) {
            return Err(SettingsError::InvalidVolume(volume.to_string()));
        }
    }
    if let Some(capacity) = settings.history_capacity {
        if !(1..=100).contains(&capacity) {
            return Err(SettingsError::InvalidHistoryCapacity(capacity));
        }
    }
    if let Some(ref locale) = settings.locale {
        if locale.trim().is_empty() {
            return Err(SettingsError::EmptyLocale);
        }
    }
    Ok(())
}
