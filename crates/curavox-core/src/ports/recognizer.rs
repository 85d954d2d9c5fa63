//! Speech recognition port - the continuous recognizer capability.
//!
//! The native recognizer (browser engine, OS service, or a test double) is
//! consumed as a black box: the session manager starts and stops it through
//! [`SpeechRecognizer`] and receives [`RecognizerEvent`]s from whatever
//! event loop the adapter runs.

use thiserror::Error;

/// Errors surfaced when starting a recognizer session.
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// No speech recognition capability exists in this environment.
    #[error("Speech recognition is not available in this environment")]
    Unavailable,

    /// The platform refused microphone access.
    #[error("Microphone permission denied")]
    PermissionDenied,

    /// The native recognizer failed for another reason.
    #[error("Recognizer error: {0}")]
    Backend(String),
}

/// Classified mid-session recognition errors (the recognizer's native
/// `error` events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionErrorKind {
    /// No speech was detected before the recognizer gave up.
    NoSpeech,
    /// The session was aborted by the platform.
    Aborted,
    /// A transient network problem (cloud recognizers).
    Network,
    /// Audio capture failed mid-session.
    AudioCapture,
    /// Permission was revoked mid-session.
    NotAllowed,
    /// Anything the platform did not classify.
    Other,
}

impl RecognitionErrorKind {
    /// Whether the session is expected to recover without intervention.
    ///
    /// Recoverable errors are absorbed: the recognizer's auto-restart
    /// handles them and the next utterance is attempted normally.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::NoSpeech | Self::Aborted | Self::Network)
    }

    /// Short human-readable description for logs and spoken feedback.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::NoSpeech => "no speech detected",
            Self::Aborted => "recognition aborted",
            Self::Network => "network problem",
            Self::AudioCapture => "microphone capture failed",
            Self::NotAllowed => "microphone permission denied",
            Self::Other => "recognition error",
        }
    }
}

/// One event from the native recognizer, delivered to the session manager.
#[derive(Debug, Clone)]
pub enum RecognizerEvent {
    /// A transcript segment was produced.
    Transcript {
        /// The transcribed text.
        text: String,
        /// Whether this is a finalized result (interim results are ignored).
        is_final: bool,
    },

    /// The recognizer reported an error but may still be running.
    Error(RecognitionErrorKind),

    /// The native session ended (normally or otherwise).
    ///
    /// The session manager decides whether to restart based on its own
    /// listening flag - this event alone never means "stop".
    Ended,
}

/// Capability interface for a continuous speech recognizer.
///
/// Implementations deliver [`RecognizerEvent`]s out-of-band (typically via
/// a channel owned by the caller); this trait only covers lifecycle.
pub trait SpeechRecognizer: Send {
    /// Request the native recognizer to begin a continuous session.
    fn start(&mut self) -> Result<(), RecognizerError>;

    /// Request the native recognizer to stop.
    ///
    /// Best-effort: the underlying teardown is asynchronous and a final
    /// [`RecognizerEvent::Ended`] may still arrive afterwards.
    fn stop(&mut self);
}
