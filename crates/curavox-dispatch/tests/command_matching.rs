//! Integration tests for the normalize → match pipeline over the full
//! builtin vocabulary, as raw utterances would arrive from a recognizer.

use curavox_core::domain::{UiControl, UiSection};
use curavox_dispatch::{normalize, ActionId, CommandArgument, CommandTable};

fn resolve(raw: &str) -> Option<(ActionId, CommandArgument)> {
    let table = CommandTable::builtin();
    table
        .resolve(&normalize(raw))
        .map(|m| (m.action, m.argument))
}

// ── Exact phrases ──────────────────────────────────────────────────

#[test]
fn every_exact_phrase_resolves_without_argument() {
    let table = CommandTable::builtin();
    let phrases: Vec<(&str, ActionId)> = table.exact_phrases().collect();
    for (phrase, action) in phrases {
        let matched = table
            .resolve(phrase)
            .unwrap_or_else(|| panic!("exact phrase {phrase:?} did not resolve"));
        assert_eq!(matched.action, action, "exact phrase {phrase:?}");
        assert_eq!(
            matched.argument,
            CommandArgument::None,
            "exact phrase {phrase:?} produced an argument"
        );
    }
}

#[test]
fn camera_controls_resolve_to_the_right_actions() {
    for (raw, control) in [
        ("start camera", UiControl::StartCamera),
        ("open camera", UiControl::StartCamera),
        ("take a photo", UiControl::CapturePhoto),
        ("take photo", UiControl::CapturePhoto),
        ("capture photo", UiControl::CapturePhoto),
        ("stop camera", UiControl::StopCamera),
        ("close camera", UiControl::StopCamera),
        ("upload photo", UiControl::UploadPhoto),
        ("upload a photo", UiControl::UploadPhoto),
    ] {
        assert_eq!(
            resolve(raw),
            Some((ActionId::TriggerControl(control), CommandArgument::None)),
            "raw: {raw:?}"
        );
    }
}

#[test]
fn navigation_phrases_resolve_to_sections() {
    for (raw, section) in [
        ("open scanner", UiSection::Scanner),
        ("open reminders", UiSection::Reminders),
        ("show reminders", UiSection::Reminders),
        ("my medicines", UiSection::MedicineList),
        ("show my medicines", UiSection::MedicineList),
        ("open profile", UiSection::Profile),
        ("open settings", UiSection::Settings),
    ] {
        assert_eq!(
            resolve(raw),
            Some((ActionId::Navigate(section), CommandArgument::None)),
            "raw: {raw:?}"
        );
    }
}

// ── Case and whitespace from real recognizers ──────────────────────

#[test]
fn recognizer_casing_and_padding_are_tolerated() {
    assert_eq!(
        resolve("  Start Camera  "),
        Some((
            ActionId::TriggerControl(UiControl::StartCamera),
            CommandArgument::None
        ))
    );
    assert_eq!(
        resolve("HELP"),
        Some((ActionId::Help, CommandArgument::None))
    );
}

// ── Parameterized phrases ──────────────────────────────────────────

#[test]
fn prefix_commands_capture_the_remainder() {
    for (raw, action, arg) in [
        ("tell me about aspirin", ActionId::MedicineInfo, "aspirin"),
        ("what is metformin", ActionId::MedicineInfo, "metformin"),
        ("search for vitamin d", ActionId::MedicineInfo, "vitamin d"),
        ("side effects of ibuprofen", ActionId::SideEffectsOf, "ibuprofen"),
        ("warnings for amoxicillin", ActionId::WarningsFor, "amoxicillin"),
        ("dosage of omeprazole", ActionId::DosageOf, "omeprazole"),
        ("dosage for paracetamol", ActionId::DosageOf, "paracetamol"),
    ] {
        assert_eq!(
            resolve(raw),
            Some((action, CommandArgument::Single(arg.to_string()))),
            "raw: {raw:?}"
        );
    }
}

#[test]
fn contains_commands_match_mid_sentence() {
    assert_eq!(
        resolve("please tell me the dosage of aspirin"),
        Some((
            ActionId::DosageOf,
            CommandArgument::Single("aspirin".to_string())
        ))
    );
}

#[test]
fn pair_command_splits_on_and() {
    assert_eq!(
        resolve("interactions between aspirin and ibuprofen"),
        Some((
            ActionId::InteractionsBetween,
            CommandArgument::Pair("aspirin".to_string(), "ibuprofen".to_string())
        ))
    );
}

#[test]
fn pair_command_without_and_degrades_to_single() {
    assert_eq!(
        resolve("interactions between aspirin"),
        Some((
            ActionId::InteractionsBetween,
            CommandArgument::Single("aspirin".to_string())
        ))
    );
}

#[test]
fn specific_pattern_wins_over_generic() {
    // "side effects of X" must not be swallowed by "what is" or by the
    // no-argument "side effects" exact phrase.
    assert_eq!(
        resolve("side effects of aspirin"),
        Some((
            ActionId::SideEffectsOf,
            CommandArgument::Single("aspirin".to_string())
        ))
    );
    assert_eq!(
        resolve("side effects"),
        Some((ActionId::SideEffects, CommandArgument::None))
    );
}

#[test]
fn empty_argument_means_missing() {
    assert_eq!(
        resolve("tell me about   "),
        Some((ActionId::MedicineInfo, CommandArgument::None))
    );
}

// ── Unmatched input ────────────────────────────────────────────────

#[test]
fn unknown_utterances_do_not_match() {
    for raw in ["xyzzy nonsense", "", "   ", "the weather is nice"] {
        assert_eq!(resolve(raw), None, "raw: {raw:?}");
    }
}
