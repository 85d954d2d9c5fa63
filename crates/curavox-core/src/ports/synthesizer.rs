//! Speech synthesis port - the text-to-speech capability.
//!
//! Only the speech output guard in `curavox-dispatch` is allowed to call
//! this trait; routing every utterance through one owner is what enforces
//! the "at most one active utterance" invariant.

use thiserror::Error;

/// A single utterance to synthesize.
///
/// Ephemeral value - built per call from the current settings, never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Text to speak.
    pub text: String,
    /// Playback rate (1.0 = normal).
    pub rate: f32,
    /// Voice pitch (1.0 = normal).
    pub pitch: f32,
    /// Playback volume (0.0–1.0).
    pub volume: f32,
}

impl SpeechRequest {
    /// Build a request with default prosody.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Errors surfaced by a synthesizer implementation.
#[derive(Debug, Error)]
pub enum SynthesizerError {
    /// No speech synthesis capability exists in this environment.
    #[error("Speech synthesis is not available in this environment")]
    Unavailable,

    /// The native synthesizer failed to start this utterance.
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),
}

/// Capability interface for a speech synthesizer.
pub trait SpeechSynthesizer: Send + Sync {
    /// Begin speaking the request.
    ///
    /// Implementations start playback and return immediately; completion
    /// is not observable through this trait.
    fn speak(&self, request: &SpeechRequest) -> Result<(), SynthesizerError>;

    /// Cancel any in-flight utterance immediately.
    ///
    /// Must be a no-op when nothing is playing.
    fn cancel(&self);

    /// Whether an utterance is currently playing.
    fn is_speaking(&self) -> bool;
}
