//! Recognition session manager.
//!
//! Owns the lifecycle of the continuous recognition session:
//!
//! ```text
//!   Idle ──start()──▶ Listening ──stop()──▶ Idle
//!                        │  ▲
//!           native end   │  │  auto-restart while still listening
//!                        ▼──┘
//! ```
//!
//! Recognizer events arrive from whatever event loop the adapter runs and
//! are fed in through [`RecognitionSession::handle_event`]. Each finalized
//! transcript flows through normalize → resolve → bridge; unmatched
//! utterances get the spoken fallback.

use std::collections::VecDeque;
use std::sync::Arc;

use curavox_core::domain::SessionState;
use curavox_core::events::AppEvent;
use curavox_core::ports::{AppEventEmitter, RecognizerEvent, SpeechRecognizer};

use crate::bridge::ActionBridge;
use crate::normalize::normalize;
use crate::speech::SpeechGuard;
use crate::table::{ActionId, CommandTable};

/// Spoken fallback for utterances that match no command.
const UNRECOGNIZED: &str = "Sorry, I didn't understand that. Say help to hear what you can ask.";

/// Manages the continuous recognition session and funnels transcripts to
/// the matcher and action bridge.
pub struct RecognitionSession {
    state: SessionState,
    recognizer: Box<dyn SpeechRecognizer>,
    table: CommandTable,
    bridge: ActionBridge,
    speech: SpeechGuard,
    emitter: Arc<dyn AppEventEmitter>,
    history: VecDeque<String>,
    history_capacity: usize,
}

impl RecognitionSession {
    /// Create a session in the `Idle` state.
    ///
    /// `history_capacity` is clamped to at least 1.
    #[must_use]
    pub fn new(
        recognizer: Box<dyn SpeechRecognizer>,
        table: CommandTable,
        bridge: ActionBridge,
        speech: SpeechGuard,
        emitter: Arc<dyn AppEventEmitter>,
        history_capacity: usize,
    ) -> Self {
        let history_capacity = history_capacity.max(1);
        Self {
            state: SessionState::Idle,
            recognizer,
            table,
            bridge,
            speech,
            emitter,
            history: VecDeque::with_capacity(history_capacity),
            history_capacity,
        }
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is listening.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.state == SessionState::Listening
    }

    /// Bounded transcript history, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// The most recent finalized transcript, if any.
    #[must_use]
    pub fn last_transcript(&self) -> Option<&str> {
        self.history.back().map(String::as_str)
    }

    /// Start continuous recognition.
    ///
    /// No-op when already listening. A start failure (no capability,
    /// permission denied) is reported by voice and the session stays
    /// `Idle` - callers never see an error.
    pub fn start(&mut self) {
        if self.is_listening() {
            return;
        }

        match self.recognizer.start() {
            Ok(()) => {
                self.set_state(SessionState::Listening);
                self.emitter.emit(AppEvent::ListeningStarted);
                self.speech
                    .speak("Voice control enabled. Say help to hear what you can ask.");
                tracing::info!("Recognition session started");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to start recognition");
                self.speech
                    .speak("Sorry, voice recognition isn't available right now.");
            }
        }
    }

    /// Stop continuous recognition.
    ///
    /// Idempotent - a second call is a silent no-op. The state flips
    /// before the native stop is requested so a late `Ended` event from
    /// the teardown can never observe a stale listening flag and restart.
    pub fn stop(&mut self) {
        if self.state == SessionState::Idle {
            return;
        }

        self.set_state(SessionState::Idle);
        self.recognizer.stop();
        self.emitter.emit(AppEvent::ListeningStopped);
        self.speech.speak("Voice control disabled.");
        tracing::info!("Recognition session stopped");
    }

    /// Feed one event from the native recognizer.
    pub fn handle_event(&mut self, event: RecognizerEvent) {
        match event {
            RecognizerEvent::Transcript { text, is_final } => {
                if !is_final {
                    return;
                }
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return;
                }
                self.dispatch_transcript(trimmed);
            }

            RecognizerEvent::Ended => {
                if self.is_listening() {
                    // Native sessions end on their own after silence or
                    // timeouts; keep listening until the user says stop.
                    if let Err(e) = self.recognizer.start() {
                        tracing::warn!(error = %e, "Auto-restart after end event failed");
                        self.speech
                            .speak("Voice recognition stopped and could not be restarted.");
                        self.set_state(SessionState::Idle);
                        self.emitter.emit(AppEvent::ListeningStopped);
                    } else {
                        tracing::debug!("Recognition auto-restarted after end event");
                    }
                }
                // After an explicit stop() the state is already Idle and
                // the event needs no action.
            }

            RecognizerEvent::Error(kind) => {
                self.emitter.emit(AppEvent::RecognitionError {
                    message: kind.describe().to_string(),
                    recoverable: kind.is_recoverable(),
                });
                if kind.is_recoverable() {
                    tracing::debug!(kind = kind.describe(), "Transient recognition error");
                } else {
                    tracing::warn!(kind = kind.describe(), "Recognition error");
                }
                self.speech
                    .speak("Sorry, I had trouble hearing that. Please try again.");
                // State intentionally unchanged: the next utterance is
                // attempted normally and auto-restart handles recovery.
            }
        }
    }

    /// Run one finalized transcript through the dispatch pipeline.
    fn dispatch_transcript(&mut self, text: &str) {
        self.push_history(text);
        self.emitter.emit(AppEvent::TranscriptReceived {
            text: text.to_string(),
        });

        let normalized = normalize(text);
        match self.table.resolve(&normalized) {
            Some(command) => {
                self.emitter.emit(AppEvent::CommandMatched {
                    action: command.action.name().to_string(),
                    argument: command.argument.describe(),
                });
                tracing::info!(
                    action = command.action.name(),
                    transcript = %text,
                    "Command matched"
                );

                // Session lifecycle stays with the session; everything else
                // goes to the bridge. The lookup handle (if any) is dropped:
                // completion feedback arrives through the speech guard.
                if command.action == ActionId::StopListening {
                    self.stop();
                } else {
                    drop(self.bridge.execute(&command));
                }
            }
            None => {
                self.emitter.emit(AppEvent::CommandUnmatched {
                    text: normalized.clone(),
                });
                tracing::debug!(transcript = %normalized, "No command matched");
                self.speech.speak(UNRECOGNIZED);
            }
        }
    }

    /// Append to the bounded history, evicting the oldest entry when full.
    fn push_history(&mut self, text: &str) {
        if self.history.len() == self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(text.to_string());
    }

    /// Transition to a new state and emit a state-change event.
    fn set_state(&mut self, new_state: SessionState) {
        if self.state != new_state {
            tracing::debug!(old = self.state.label(), new = new_state.label(), "Session state");
            self.state = new_state;
            self.emitter.emit(AppEvent::StateChanged { state: new_state });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::SpeechParams;
    use curavox_core::ports::{
        NoopEmitter, NoopUiSurface, RecognizerError, SpeechRequest, SpeechSynthesizer,
        SynthesizerError,
    };

    struct StubRecognizer;
    impl SpeechRecognizer for StubRecognizer {
        fn start(&mut self) -> Result<(), RecognizerError> {
            Ok(())
        }
        fn stop(&mut self) {}
    }

    struct SilentSynth;
    impl SpeechSynthesizer for SilentSynth {
        fn speak(&self, _request: &SpeechRequest) -> Result<(), SynthesizerError> {
            Ok(())
        }
        fn cancel(&self) {}
        fn is_speaking(&self) -> bool {
            false
        }
    }

    fn session() -> RecognitionSession {
        let ui = Arc::new(NoopUiSurface);
        let speech = SpeechGuard::new(
            Arc::new(SilentSynth),
            Arc::clone(&ui) as Arc<dyn curavox_core::ports::UiSurface>,
            Arc::new(NoopEmitter::new()),
            SpeechParams::default(),
        );
        let bridge = ActionBridge::new(ui, speech.clone());
        RecognitionSession::new(
            Box::new(StubRecognizer),
            CommandTable::builtin(),
            bridge,
            speech,
            Arc::new(NoopEmitter::new()),
            3,
        )
    }

    #[test]
    fn history_is_bounded_fifo() {
        let mut s = session();
        s.start();
        for text in ["one", "two", "three", "four"] {
            s.handle_event(RecognizerEvent::Transcript {
                text: text.to_string(),
                is_final: true,
            });
        }
        let history: Vec<&str> = s.history().collect();
        assert_eq!(history, vec!["two", "three", "four"]);
        assert_eq!(s.last_transcript(), Some("four"));
    }

    #[test]
    fn interim_results_are_ignored() {
        let mut s = session();
        s.start();
        s.handle_event(RecognizerEvent::Transcript {
            text: "partial".to_string(),
            is_final: false,
        });
        assert!(s.last_transcript().is_none());
    }

    #[test]
    fn blank_transcripts_are_ignored() {
        let mut s = session();
        s.start();
        s.handle_event(RecognizerEvent::Transcript {
            text: "   ".to_string(),
            is_final: true,
        });
        assert!(s.last_transcript().is_none());
    }
}
