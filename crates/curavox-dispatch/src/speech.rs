//! Speech output guard - serialized access to the synthesizer.
//!
//! The guard is the only component allowed to touch the synthesis
//! capability, which is what enforces the system-wide invariant of at most
//! one active utterance. There is no queue: a new request cancels whatever
//! is still playing, because the newest feedback is always the most
//! relevant to a user navigating by voice.
//!
//! Every call also writes the text to the visible caption surface, before
//! any audio is attempted, so sighted or hard-of-hearing users get the
//! same feedback even when synthesis is unavailable.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use curavox_core::events::AppEvent;
use curavox_core::ports::{
    AppEventEmitter, SpeechRequest, SpeechSynthesizer, SynthesizerError, UiSurface,
};
use curavox_core::settings::Settings;

/// Prosody applied to every outgoing utterance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechParams {
    /// Playback rate (1.0 = normal).
    pub rate: f32,
    /// Voice pitch (1.0 = normal).
    pub pitch: f32,
    /// Playback volume (0.0–1.0).
    pub volume: f32,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

impl SpeechParams {
    /// Build prosody parameters from user settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            rate: settings.effective_speech_rate(),
            pitch: settings.effective_speech_pitch(),
            volume: settings.effective_speech_volume(),
        }
    }
}

/// Serialized single-slot access to the speech synthesizer.
///
/// Cheap to clone; all clones share the same synthesizer and the same
/// one-shot "synthesis unavailable" report flag.
#[derive(Clone)]
pub struct SpeechGuard {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    ui: Arc<dyn UiSurface>,
    emitter: Arc<dyn AppEventEmitter>,
    params: SpeechParams,
    voice_feedback: bool,
    unavailable_reported: Arc<AtomicBool>,
}

impl SpeechGuard {
    /// Create a guard over the given synthesizer and caption surface.
    #[must_use]
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        ui: Arc<dyn UiSurface>,
        emitter: Arc<dyn AppEventEmitter>,
        params: SpeechParams,
    ) -> Self {
        Self {
            synthesizer,
            ui,
            emitter,
            params,
            voice_feedback: true,
            unavailable_reported: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Disable or re-enable audio output (captions always stay on).
    #[must_use]
    pub fn with_voice_feedback(mut self, enabled: bool) -> Self {
        self.voice_feedback = enabled;
        self
    }

    /// Speak text, cancelling any in-flight utterance first.
    ///
    /// Fire-and-forget: failures degrade to caption-only feedback and are
    /// never surfaced to the caller.
    pub fn speak(&self, text: &str) {
        // Caption first - the visible surface must update even when the
        // audio path fails.
        self.ui.show_caption(text);
        self.emitter.emit(AppEvent::Spoke {
            text: text.to_string(),
        });

        if !self.voice_feedback {
            return;
        }

        // Newest request wins.
        if self.synthesizer.is_speaking() {
            self.synthesizer.cancel();
        }

        let request = SpeechRequest {
            text: text.to_string(),
            rate: self.params.rate,
            pitch: self.params.pitch,
            volume: self.params.volume,
        };

        match self.synthesizer.speak(&request) {
            Ok(()) => {}
            Err(SynthesizerError::Unavailable) => {
                if !self.unavailable_reported.swap(true, Ordering::SeqCst) {
                    tracing::warn!("Speech synthesis unavailable - captions only");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to start utterance");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curavox_core::ports::NoopEmitter;
    use std::sync::Mutex;

    /// Records every synthesizer call in order.
    #[derive(Default)]
    struct RecordingSynth {
        calls: Mutex<Vec<String>>,
        speaking: AtomicBool,
        unavailable: bool,
    }

    impl SpeechSynthesizer for RecordingSynth {
        fn speak(&self, request: &SpeechRequest) -> Result<(), SynthesizerError> {
            if self.unavailable {
                return Err(SynthesizerError::Unavailable);
            }
            self.calls
                .lock()
                .unwrap()
                .push(format!("speak:{}", request.text));
            self.speaking.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn cancel(&self) {
            self.calls.lock().unwrap().push("cancel".to_string());
            self.speaking.store(false, Ordering::SeqCst);
        }

        fn is_speaking(&self) -> bool {
            self.speaking.load(Ordering::SeqCst)
        }
    }

    /// Captures caption text.
    #[derive(Default)]
    struct CaptionUi {
        captions: Mutex<Vec<String>>,
    }

    impl UiSurface for CaptionUi {
        fn trigger_control(&self, _control: curavox_core::domain::UiControl) {}
        fn navigate(&self, _section: curavox_core::domain::UiSection) {}
        fn show_caption(&self, text: &str) {
            self.captions.lock().unwrap().push(text.to_string());
        }
    }

    fn guard_with(
        synth: Arc<RecordingSynth>,
        ui: Arc<CaptionUi>,
    ) -> SpeechGuard {
        SpeechGuard::new(
            synth,
            ui,
            Arc::new(NoopEmitter::new()),
            SpeechParams::default(),
        )
    }

    #[test]
    fn new_request_cancels_in_flight_utterance() {
        let synth = Arc::new(RecordingSynth::default());
        let ui = Arc::new(CaptionUi::default());
        let guard = guard_with(Arc::clone(&synth), Arc::clone(&ui));

        guard.speak("first announcement");
        guard.speak("second announcement");

        let calls = synth.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                "speak:first announcement",
                "cancel",
                "speak:second announcement"
            ]
        );
    }

    #[test]
    fn no_cancel_when_idle() {
        let synth = Arc::new(RecordingSynth::default());
        let ui = Arc::new(CaptionUi::default());
        let guard = guard_with(Arc::clone(&synth), ui);

        guard.speak("only one");
        let calls = synth.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["speak:only one"]);
    }

    #[test]
    fn caption_survives_unavailable_synthesis() {
        let synth = Arc::new(RecordingSynth {
            unavailable: true,
            ..RecordingSynth::default()
        });
        let ui = Arc::new(CaptionUi::default());
        let guard = guard_with(synth, Arc::clone(&ui));

        guard.speak("visible anyway");
        guard.speak("still visible");

        let captions = ui.captions.lock().unwrap().clone();
        assert_eq!(captions, vec!["visible anyway", "still visible"]);
    }

    #[test]
    fn voice_feedback_off_keeps_captions() {
        let synth = Arc::new(RecordingSynth::default());
        let ui = Arc::new(CaptionUi::default());
        let guard = guard_with(Arc::clone(&synth), Arc::clone(&ui)).with_voice_feedback(false);

        guard.speak("quiet");

        assert!(synth.calls.lock().unwrap().is_empty());
        assert_eq!(ui.captions.lock().unwrap().clone(), vec!["quiet"]);
    }

    #[test]
    fn newest_text_is_never_lost() {
        let synth = Arc::new(RecordingSynth::default());
        let ui = Arc::new(CaptionUi::default());
        let guard = guard_with(Arc::clone(&synth), Arc::clone(&ui));

        guard.speak("a");
        guard.speak("b");
        guard.speak("c");

        let captions = ui.captions.lock().unwrap().clone();
        assert_eq!(captions.last().unwrap(), "c");
        let calls = synth.calls.lock().unwrap().clone();
        assert_eq!(calls.last().unwrap(), "speak:c");
    }
}
