#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{MedicineSummary, SessionState, UiControl, UiSection};
pub use events::AppEvent;
pub use ports::{
    AppEventEmitter, MedicineSearchPort, NoopEmitter, NoopUiSurface, RecognitionErrorKind,
    RecognizerError, RecognizerEvent, SearchPortError, SettingsRepository,
    SettingsRepositoryError, SpeechRecognizer, SpeechRequest, SpeechSynthesizer, SynthesizerError,
    UiSurface,
};
pub use settings::{
    DEFAULT_HISTORY_CAPACITY, DEFAULT_LOCALE, Settings, SettingsError, SettingsUpdate,
    validate_settings,
};

// Silence unused dev-dependency warnings - serde_json is exercised in
// the events round-trip tests only.
#[cfg(test)]
use serde_json as _;
