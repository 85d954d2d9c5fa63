//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the dispatcher expects from its environment:
//! the native speech recognizer and synthesizer, the host UI, the medicine
//! search backend, and settings storage.
//!
//! # Design Rules
//!
//! - No HTTP/browser/terminal implementation details in any signature
//! - The dispatcher holds no UI references - only a [`UiSurface`] handle
//! - Traits are minimal and intent-based

pub mod event_emitter;
pub mod medicine_search;
pub mod recognizer;
pub mod settings_repository;
pub mod synthesizer;
pub mod ui_surface;

// Re-export port traits for convenience
pub use event_emitter::{AppEventEmitter, NoopEmitter};
pub use medicine_search::{MedicineSearchPort, SearchPortError};
pub use recognizer::{RecognitionErrorKind, RecognizerError, RecognizerEvent, SpeechRecognizer};
pub use settings_repository::{SettingsRepository, SettingsRepositoryError};
pub use synthesizer::{SpeechRequest, SpeechSynthesizer, SynthesizerError};
pub use ui_surface::{NoopUiSurface, UiSurface};
