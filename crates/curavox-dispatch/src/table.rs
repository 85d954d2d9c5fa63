//! The static command table.
//!
//! Built once at startup: exact phrases live in a hash map, parameterized
//! patterns in a priority-ordered list. Priority matters - the most
//! specific anchors are tried first so "side effects of ibuprofen" reaches
//! the parameterized handler even though a generic "side effects" exact
//! command also exists.

use std::collections::HashMap;

use curavox_core::domain::{UiControl, UiSection};

/// A named operation the dispatcher can perform in response to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    /// Speak the command summary.
    Help,
    /// Stop the recognition session (handled by the session itself).
    StopListening,
    /// Activate a named UI control.
    TriggerControl(UiControl),
    /// Navigate to an application section.
    Navigate(UiSection),
    /// Look up a medicine and speak a summary ("tell me about X").
    MedicineInfo,
    /// Generic "side effects" with no medicine named - prompts for one.
    SideEffects,
    /// Side effects of a named medicine.
    SideEffectsOf,
    /// Dosage guidance for a named medicine.
    DosageOf,
    /// Warnings and contraindications for a named medicine.
    WarningsFor,
    /// Interaction check between two named medicines.
    InteractionsBetween,
}

impl ActionId {
    /// Stable snake_case name, used in events and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::StopListening => "stop_listening",
            Self::TriggerControl(_) => "trigger_control",
            Self::Navigate(_) => "navigate",
            Self::MedicineInfo => "medicine_info",
            Self::SideEffects => "side_effects",
            Self::SideEffectsOf => "side_effects_of",
            Self::DosageOf => "dosage_of",
            Self::WarningsFor => "warnings_for",
            Self::InteractionsBetween => "interactions_between",
        }
    }
}

/// How a pattern is tested against a normalized utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole utterance equals the pattern.
    Exact,
    /// The utterance starts with the pattern; the remainder is the argument.
    PrefixWithArg,
    /// The pattern appears anywhere; the text after it is the argument.
    ContainsWithArg,
}

/// How many arguments a parameterized pattern yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgArity {
    /// One free-text argument (a medicine name).
    One,
    /// Two arguments, split on a literal " and ".
    Two,
}

/// One parameterized command pattern.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    /// Literal anchor text, including any trailing space.
    pub pattern: &'static str,
    /// How the anchor is tested.
    pub kind: MatchKind,
    /// Expected argument shape.
    pub arity: ArgArity,
    /// The action this pattern routes to.
    pub action: ActionId,
}

/// Immutable mapping from phrases to actions, built once at startup.
pub struct CommandTable {
    exact: HashMap<&'static str, ActionId>,
    parameterized: Vec<CommandEntry>,
}

impl CommandTable {
    /// Build the built-in command table.
    #[must_use]
    pub fn builtin() -> Self {
        let exact: HashMap<&'static str, ActionId> = [
            ("help", ActionId::Help),
            ("what can i say", ActionId::Help),
            ("stop listening", ActionId::StopListening),
            // Camera / photo controls
            ("start camera", ActionId::TriggerControl(UiControl::StartCamera)),
            ("open camera", ActionId::TriggerControl(UiControl::StartCamera)),
            ("take photo", ActionId::TriggerControl(UiControl::CapturePhoto)),
            ("take a photo", ActionId::TriggerControl(UiControl::CapturePhoto)),
            ("capture photo", ActionId::TriggerControl(UiControl::CapturePhoto)),
            ("stop camera", ActionId::TriggerControl(UiControl::StopCamera)),
            ("close camera", ActionId::TriggerControl(UiControl::StopCamera)),
            ("upload photo", ActionId::TriggerControl(UiControl::UploadPhoto)),
            ("upload a photo", ActionId::TriggerControl(UiControl::UploadPhoto)),
            // Navigation
            ("open scanner", ActionId::Navigate(UiSection::Scanner)),
            ("my medicines", ActionId::Navigate(UiSection::MedicineList)),
            ("show my medicines", ActionId::Navigate(UiSection::MedicineList)),
            ("open reminders", ActionId::Navigate(UiSection::Reminders)),
            ("show reminders", ActionId::Navigate(UiSection::Reminders)),
            ("open profile", ActionId::Navigate(UiSection::Profile)),
            ("open settings", ActionId::Navigate(UiSection::Settings)),
            // Generic information commands with no medicine named
            ("side effects", ActionId::SideEffects),
        ]
        .into_iter()
        .collect();

        // Priority order: longer, more specific anchors first so they are
        // never shadowed by a shorter pattern that would also match.
        let parameterized = vec![
            CommandEntry {
                pattern: "interactions between ",
                kind: MatchKind::ContainsWithArg,
                arity: ArgArity::Two,
                action: ActionId::InteractionsBetween,
            },
            CommandEntry {
                pattern: "side effects of ",
                kind: MatchKind::ContainsWithArg,
                arity: ArgArity::One,
                action: ActionId::SideEffectsOf,
            },
            CommandEntry {
                pattern: "warnings for ",
                kind: MatchKind::ContainsWithArg,
                arity: ArgArity::One,
                action: ActionId::WarningsFor,
            },
            CommandEntry {
                pattern: "dosage of ",
                kind: MatchKind::ContainsWithArg,
                arity: ArgArity::One,
                action: ActionId::DosageOf,
            },
            CommandEntry {
                pattern: "dosage for ",
                kind: MatchKind::ContainsWithArg,
                arity: ArgArity::One,
                action: ActionId::DosageOf,
            },
            CommandEntry {
                pattern: "tell me about ",
                kind: MatchKind::PrefixWithArg,
                arity: ArgArity::One,
                action: ActionId::MedicineInfo,
            },
            CommandEntry {
                pattern: "what is ",
                kind: MatchKind::PrefixWithArg,
                arity: ArgArity::One,
                action: ActionId::MedicineInfo,
            },
            CommandEntry {
                pattern: "search for ",
                kind: MatchKind::PrefixWithArg,
                arity: ArgArity::One,
                action: ActionId::MedicineInfo,
            },
        ];

        Self {
            exact,
            parameterized,
        }
    }

    /// Exact-phrase lookup against the full normalized utterance.
    #[must_use]
    pub fn exact(&self, normalized: &str) -> Option<ActionId> {
        self.exact.get(normalized).copied()
    }

    /// Parameterized patterns in priority order.
    #[must_use]
    pub fn parameterized(&self) -> &[CommandEntry] {
        &self.parameterized
    }

    /// All exact phrases, for help/listing surfaces. Order is unspecified.
    pub fn exact_phrases(&self) -> impl Iterator<Item = (&'static str, ActionId)> + '_ {
        self.exact.iter().map(|(phrase, action)| (*phrase, *action))
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_exact_and_parameterized_entries() {
        let table = CommandTable::builtin();
        assert!(table.exact("help").is_some());
        assert!(!table.parameterized().is_empty());
    }

    #[test]
    fn exact_lookup_requires_full_phrase() {
        let table = CommandTable::builtin();
        assert_eq!(table.exact("start camera"), Some(ActionId::TriggerControl(UiControl::StartCamera)));
        assert!(table.exact("start camera now").is_none());
    }

    #[test]
    fn interaction_pattern_sorts_before_single_argument_anchors() {
        // "interactions between " must be tried before any anchor that could
        // also appear in an interaction query.
        let table = CommandTable::builtin();
        assert_eq!(
            table.parameterized()[0].action,
            ActionId::InteractionsBetween
        );
    }

    #[test]
    fn action_names_are_stable() {
        assert_eq!(ActionId::MedicineInfo.name(), "medicine_info");
        assert_eq!(
            ActionId::Navigate(UiSection::Reminders).name(),
            "navigate"
        );
    }
}
