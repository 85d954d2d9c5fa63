//! Action bridge - executes resolved commands against the injected ports.
//!
//! Side effects are restricted by design: a handler invokes at most one
//! named UI control, issues at most one read request to the medicine
//! search port, and speaks through the output guard. Handlers never block
//! the recognition session - backend lookups run on a spawned task and the
//! spoken result arrives via the guard when the response lands.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;

use curavox_core::ports::{MedicineSearchPort, UiSurface};

use crate::knowledge::KnowledgeBase;
use crate::matcher::{CommandArgument, MatchedCommand};
use crate::speech::SpeechGuard;
use crate::table::ActionId;

/// Spoken command summary for the help action.
pub const HELP_TEXT: &str = "You can say: start camera, take a photo, stop camera, \
upload photo, tell me about a medicine, side effects of a medicine, dosage of a \
medicine, warnings for a medicine, interactions between two medicines, open \
reminders, show my medicines, open profile, or stop listening.";

/// Executes resolved commands by invoking the appropriate side effect.
pub struct ActionBridge {
    ui: Arc<dyn UiSurface>,
    speech: SpeechGuard,
    search: Option<Arc<dyn MedicineSearchPort>>,
    knowledge: KnowledgeBase,
    /// Monotonic generation counter for backend lookups. A response whose
    /// generation is no longer current was superseded by a newer command
    /// and is discarded instead of spoken.
    lookup_generation: Arc<AtomicU64>,
}

impl ActionBridge {
    /// Create a bridge with no backend search wired (knowledge-base only).
    #[must_use]
    pub fn new(ui: Arc<dyn UiSurface>, speech: SpeechGuard) -> Self {
        Self {
            ui,
            speech,
            search: None,
            knowledge: KnowledgeBase::builtin(),
            lookup_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wire a backend medicine search port.
    #[must_use]
    pub fn with_search(mut self, search: Arc<dyn MedicineSearchPort>) -> Self {
        self.search = Some(search);
        self
    }

    /// Execute a resolved command.
    ///
    /// Returns immediately. For backend lookups the spawned task handle is
    /// returned so callers that need completion (one-shot CLI, tests) can
    /// await it; the session simply drops it.
    pub fn execute(&self, command: &MatchedCommand) -> Option<JoinHandle<()>> {
        tracing::debug!(action = command.action.name(), "Executing action");

        match command.action {
            ActionId::Help => {
                self.speech.speak(HELP_TEXT);
                None
            }

            // Lifecycle actions are intercepted by the session before
            // dispatch ever reaches the bridge.
            ActionId::StopListening => None,

            ActionId::TriggerControl(control) => {
                self.ui.trigger_control(control);
                self.speech.speak(&format!("Okay, {}.", control.label()));
                None
            }

            ActionId::Navigate(section) => {
                self.ui.navigate(section);
                self.speech.speak(&format!("Opening {}.", section.label()));
                None
            }

            ActionId::MedicineInfo => self.medicine_info(&command.argument),

            ActionId::SideEffects => {
                self.speech.speak(
                    "Which medicine? Say side effects of, followed by the medicine name.",
                );
                None
            }

            ActionId::SideEffectsOf => {
                match command.argument.primary() {
                    Some(name) => self.speech.speak(&self.knowledge.side_effects_answer(name)),
                    None => self.speech.speak(
                        "Which medicine? Say side effects of, followed by the medicine name.",
                    ),
                }
                None
            }

            ActionId::DosageOf => {
                match command.argument.primary() {
                    Some(name) => self.speech.speak(&self.knowledge.dosage_answer(name)),
                    None => self
                        .speech
                        .speak("Which medicine? Say dosage of, followed by the medicine name."),
                }
                None
            }

            ActionId::WarningsFor => {
                match command.argument.primary() {
                    Some(name) => self.speech.speak(&self.knowledge.warnings_answer(name)),
                    None => self
                        .speech
                        .speak("Which medicine? Say warnings for, followed by the medicine name."),
                }
                None
            }

            ActionId::InteractionsBetween => {
                match &command.argument {
                    CommandArgument::Pair(first, second) => self
                        .speech
                        .speak(&self.knowledge.interactions_answer(first, second)),
                    CommandArgument::Single(_) | CommandArgument::None => self.speech.speak(
                        "Please name both medicines. Say interactions between, then the \
                         first medicine, then and, then the second.",
                    ),
                }
                None
            }
        }
    }

    /// "Tell me about X" - backend lookup when wired, local knowledge
    /// otherwise.
    fn medicine_info(&self, argument: &CommandArgument) -> Option<JoinHandle<()>> {
        let Some(name) = argument.primary() else {
            self.speech
                .speak("Which medicine? Say tell me about, followed by the medicine name.");
            return None;
        };

        let Some(search) = &self.search else {
            let reply = self.knowledge.describe(name).unwrap_or_else(|| {
                format!(
                    "I don't have information about {name}. Try scanning the packaging instead."
                )
            });
            self.speech.speak(&reply);
            return None;
        };

        // Claim a fresh generation for this lookup; any lookup issued later
        // bumps the counter past it and this response becomes stale.
        let generation = self.lookup_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let counter = Arc::clone(&self.lookup_generation);
        let search = Arc::clone(search);
        let speech = self.speech.clone();
        let knowledge = self.knowledge;
        let name = name.to_string();

        Some(tokio::spawn(async move {
            let reply = match search.search(&name).await {
                Ok(results) => match results.first() {
                    Some(medicine) => medicine.spoken_summary(),
                    None => format!(
                        "I couldn't find {name}. Check the name or try scanning the packaging."
                    ),
                },
                Err(e) => {
                    tracing::warn!(error = %e, query = %name, "Medicine lookup failed");
                    // Never surface raw error text; prefer the local entry
                    // when we have one.
                    knowledge.describe(&name).unwrap_or_else(|| {
                        "I couldn't reach the medicine service. Please try again later."
                            .to_string()
                    })
                }
            };

            if counter.load(Ordering::SeqCst) != generation {
                tracing::debug!(query = %name, "Discarding stale lookup response");
                return;
            }

            speech.speak(&reply);
        }))
    }
}
