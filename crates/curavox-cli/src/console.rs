//! Console implementations of the speech and UI ports.
//!
//! The console has no real recognizer or synthesizer. Transcripts are typed
//! lines fed in by the run loop, spoken output is printed, and UI actions
//! are logged instead of rendered.

use curavox_core::domain::{UiControl, UiSection};
use curavox_core::ports::{
    RecognizerError, SpeechRecognizer, SpeechRequest, SpeechSynthesizer, SynthesizerError,
    UiSurface,
};

/// Recognizer backed by typed input instead of a microphone.
///
/// Lifecycle calls always succeed; the run loop produces the transcripts.
#[derive(Debug, Default)]
pub struct ConsoleRecognizer {
    active: bool,
}

impl ConsoleRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpeechRecognizer for ConsoleRecognizer {
    fn start(&mut self) -> Result<(), RecognizerError> {
        self.active = true;
        tracing::debug!("Console recognizer started");
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
        tracing::debug!("Console recognizer stopped");
    }
}

/// Synthesizer that prints utterances instead of speaking them.
///
/// Printing is instantaneous, so there is never an in-flight utterance
/// to cancel.
#[derive(Debug, Default)]
pub struct ConsoleSynthesizer;

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn speak(&self, request: &SpeechRequest) -> Result<(), SynthesizerError> {
        println!("[voice] {}", request.text);
        Ok(())
    }

    fn cancel(&self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}

/// UI surface that logs actions instead of rendering them.
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl UiSurface for ConsoleUi {
    fn trigger_control(&self, control: UiControl) {
        println!("[ui] control: {}", control.label());
    }

    fn navigate(&self, section: UiSection) {
        println!("[ui] navigate: {}", section.label());
    }

    fn show_caption(&self, text: &str) {
        println!("[caption] {text}");
    }
}
