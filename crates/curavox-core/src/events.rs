//! Canonical event union for all cross-adapter events.
//!
//! This module is the single source of truth for events consumed by UI
//! listeners and logging sinks. Events are serialized with a `type` tag so
//! a TypeScript front end can discriminate on them directly:
//!
//! ```json
//! { "type": "transcript_received", "text": "tell me about aspirin" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::SessionState;

/// Canonical event types emitted by the voice dispatcher.
///
/// Each variant carries enough context to be self-describing; consumers
/// never need to correlate events with dispatcher-internal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// Continuous recognition was started (explicit `start()`).
    ListeningStarted,

    /// Continuous recognition was stopped (explicit `stop()`).
    ListeningStopped,

    /// The recognition session changed state.
    StateChanged {
        /// New session state.
        state: SessionState,
    },

    /// A finalized transcript arrived from the recognizer.
    TranscriptReceived {
        /// The raw transcript text (not yet normalized).
        text: String,
    },

    /// A transcript resolved to a command.
    CommandMatched {
        /// Stable name of the matched action.
        action: String,
        /// Extracted argument text, when the command is parameterized.
        #[serde(skip_serializing_if = "Option::is_none")]
        argument: Option<String>,
    },

    /// A transcript matched no command; the fallback message was spoken.
    CommandUnmatched {
        /// The normalized utterance that failed to match.
        text: String,
    },

    /// Text was sent to the speech output guard (and the caption surface).
    Spoke {
        /// The spoken text.
        text: String,
    },

    /// The recognizer reported a mid-session error.
    RecognitionError {
        /// Human-readable description.
        message: String,
        /// Whether the session is expected to recover on its own.
        recoverable: bool,
    },
}
