//! Local medicine knowledge base.
//!
//! A small built-in reference covering common over-the-counter and
//! maintenance medicines, used for canned spoken answers (side effects,
//! dosage, warnings, interactions) and as a fallback when the backend
//! search is unreachable. It makes no claim of medical completeness -
//! every answer for an unknown medicine defers to a pharmacist.

/// One medicine the knowledge base knows about.
#[derive(Debug, Clone, Copy)]
pub struct MedicineEntry {
    /// Common name.
    pub name: &'static str,
    /// Generic (INN) name.
    pub generic_name: &'static str,
    /// What it is used for.
    pub uses: &'static [&'static str],
    /// Common side effects.
    pub side_effects: &'static [&'static str],
    /// Known interacting drugs or drug classes.
    pub interactions: &'static [&'static str],
    /// Warnings and contraindications.
    pub warnings: &'static [&'static str],
    /// Maximum daily dose for a typical adult.
    pub max_daily_dose: &'static str,
}

static BUILTIN_ENTRIES: &[MedicineEntry] = &[
    MedicineEntry {
        name: "paracetamol",
        generic_name: "acetaminophen",
        uses: &["pain relief", "fever reduction"],
        side_effects: &["liver damage with overdose", "skin reactions"],
        interactions: &["alcohol", "blood thinners"],
        warnings: &["avoid with liver disease", "avoid with kidney disease"],
        max_daily_dose: "4000 milligrams",
    },
    MedicineEntry {
        name: "ibuprofen",
        generic_name: "ibuprofen",
        uses: &["pain relief", "inflammation", "fever reduction"],
        side_effects: &["stomach irritation", "kidney problems", "heart issues"],
        interactions: &["blood thinners", "diuretics", "lithium", "aspirin"],
        warnings: &[
            "avoid with stomach ulcers",
            "avoid with heart disease",
            "avoid with kidney disease",
        ],
        max_daily_dose: "1200 milligrams over the counter",
    },
    MedicineEntry {
        name: "aspirin",
        generic_name: "acetylsalicylic acid",
        uses: &[
            "pain relief",
            "inflammation",
            "fever reduction",
            "cardiovascular protection",
        ],
        side_effects: &["stomach irritation", "bleeding", "allergic reactions"],
        interactions: &["blood thinners", "ibuprofen", "methotrexate", "warfarin"],
        warnings: &[
            "avoid with stomach ulcers",
            "avoid with bleeding disorders",
            "not for children under 16",
        ],
        max_daily_dose: "4000 milligrams",
    },
    MedicineEntry {
        name: "amoxicillin",
        generic_name: "amoxicillin",
        uses: &[
            "bacterial infections",
            "respiratory tract infections",
            "urinary tract infections",
        ],
        side_effects: &["diarrhea", "nausea", "allergic reactions"],
        interactions: &["oral contraceptives", "warfarin", "allopurinol"],
        warnings: &["avoid with penicillin allergy", "avoid with mononucleosis"],
        max_daily_dose: "3000 milligrams",
    },
    MedicineEntry {
        name: "omeprazole",
        generic_name: "omeprazole",
        uses: &["acid reflux", "peptic ulcer disease"],
        side_effects: &["headache", "nausea", "diarrhea"],
        interactions: &["clopidogrel", "diazepam", "warfarin"],
        warnings: &["avoid with known hypersensitivity"],
        max_daily_dose: "120 milligrams",
    },
    MedicineEntry {
        name: "metformin",
        generic_name: "metformin",
        uses: &["type 2 diabetes", "insulin resistance"],
        side_effects: &["nausea", "diarrhea", "metallic taste"],
        interactions: &["contrast media", "alcohol"],
        warnings: &[
            "avoid with kidney disease",
            "avoid with liver disease",
            "avoid with heart failure",
        ],
        max_daily_dose: "2550 milligrams",
    },
];

/// Read-only lookup over the built-in medicine entries.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    entries: &'static [MedicineEntry],
}

impl KnowledgeBase {
    /// The built-in knowledge base.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES,
        }
    }

    /// Look up a medicine by common or generic name, case-insensitively.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static MedicineEntry> {
        let needle = name.trim().to_lowercase();
        self.entries.iter().find(|entry| {
            entry.name.eq_ignore_ascii_case(&needle)
                || entry.generic_name.eq_ignore_ascii_case(&needle)
        })
    }

    /// Spoken one-paragraph description of a medicine, when known.
    #[must_use]
    pub fn describe(&self, name: &str) -> Option<String> {
        let entry = self.lookup(name)?;
        let mut text = capitalize(entry.name);
        if entry.generic_name != entry.name {
            text.push_str(", also known as ");
            text.push_str(entry.generic_name);
        }
        text.push_str(", is used for ");
        text.push_str(&join_spoken(entry.uses));
        text.push_str(". The maximum daily dose for an adult is ");
        text.push_str(entry.max_daily_dose);
        text.push('.');
        Some(text)
    }

    /// Spoken answer for "side effects of X".
    #[must_use]
    pub fn side_effects_answer(&self, name: &str) -> String {
        match self.lookup(name) {
            Some(entry) => format!(
                "Common side effects of {} include {}. Contact your doctor if any of these become severe.",
                entry.name,
                join_spoken(entry.side_effects)
            ),
            None => unknown_medicine_answer(name),
        }
    }

    /// Spoken answer for "dosage of X".
    #[must_use]
    pub fn dosage_answer(&self, name: &str) -> String {
        match self.lookup(name) {
            Some(entry) => format!(
                "The maximum daily dose of {} for an adult is {}. Always follow the instructions on your packaging or prescription.",
                entry.name, entry.max_daily_dose
            ),
            None => unknown_medicine_answer(name),
        }
    }

    /// Spoken answer for "warnings for X".
    #[must_use]
    pub fn warnings_answer(&self, name: &str) -> String {
        match self.lookup(name) {
            Some(entry) => format!(
                "Warnings for {}: {}.",
                entry.name,
                join_spoken(entry.warnings)
            ),
            None => unknown_medicine_answer(name),
        }
    }

    /// Spoken answer for "interactions between X and Y".
    ///
    /// A pair is flagged when either entry lists the other by name, generic
    /// name, or a class phrase containing it. Unknown medicines never yield
    /// "no interaction" - only a cautious no-data answer.
    #[must_use]
    pub fn interactions_answer(&self, first: &str, second: &str) -> String {
        let a = self.lookup(first);
        let b = self.lookup(second);

        if a.is_none() && b.is_none() {
            return format!(
                "I don't have interaction data for {first} or {second}. Please ask your pharmacist before combining them."
            );
        }

        let flagged = matches!((a, b), (Some(ea), Some(eb)) if lists_other(ea, eb) || lists_other(eb, ea))
            || matches!((a, b), (Some(ea), None) if lists_name(ea, second))
            || matches!((a, b), (None, Some(eb)) if lists_name(eb, first));

        if flagged {
            format!(
                "Caution: {first} and {second} have a known interaction. Do not combine them without talking to your doctor or pharmacist."
            )
        } else {
            format!(
                "I don't have a known interaction on record between {first} and {second}, but my data is limited. Always confirm with your pharmacist."
            )
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether `entry` lists `other` (by name or generic) in its interactions.
fn lists_other(entry: &MedicineEntry, other: &MedicineEntry) -> bool {
    lists_name(entry, other.name) || lists_name(entry, other.generic_name)
}

/// Whether any interaction phrase of `entry` mentions `name`.
fn lists_name(entry: &MedicineEntry, name: &str) -> bool {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    entry
        .interactions
        .iter()
        .any(|phrase| phrase.to_lowercase().contains(&needle))
}

fn unknown_medicine_answer(name: &str) -> String {
    format!(
        "I don't have information about {name}. Please check the medication leaflet or ask your pharmacist."
    )
}

/// Join a spoken list: "a", "a and b", "a, b, and c".
fn join_spoken(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_accepts_generic() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.lookup("Paracetamol").is_some());
        assert_eq!(kb.lookup("Acetaminophen").unwrap().name, "paracetamol");
        assert!(kb.lookup("unobtainium").is_none());
    }

    #[test]
    fn describe_mentions_generic_and_dose() {
        let kb = KnowledgeBase::builtin();
        let text = kb.describe("aspirin").unwrap();
        assert!(text.starts_with("Aspirin, also known as acetylsalicylic acid"));
        assert!(text.contains("4000 milligrams"));
    }

    #[test]
    fn side_effects_answer_for_unknown_defers_to_pharmacist() {
        let kb = KnowledgeBase::builtin();
        let answer = kb.side_effects_answer("unobtainium");
        assert!(answer.contains("pharmacist"));
    }

    #[test]
    fn known_interaction_is_flagged() {
        let kb = KnowledgeBase::builtin();
        let answer = kb.interactions_answer("aspirin", "ibuprofen");
        assert!(answer.starts_with("Caution:"), "got: {answer}");
    }

    #[test]
    fn interaction_with_one_known_drug_checks_its_list() {
        let kb = KnowledgeBase::builtin();
        // warfarin itself is not in the knowledge base, but omeprazole lists it.
        let answer = kb.interactions_answer("omeprazole", "warfarin");
        assert!(answer.starts_with("Caution:"), "got: {answer}");
    }

    #[test]
    fn unknown_pair_never_claims_no_interaction() {
        let kb = KnowledgeBase::builtin();
        let answer = kb.interactions_answer("unobtainium", "phlebotinum");
        assert!(answer.contains("don't have interaction data"));
        assert!(!answer.contains("no known interaction"));
    }

    #[test]
    fn spoken_list_joins_naturally() {
        assert_eq!(join_spoken(&["a"]), "a");
        assert_eq!(join_spoken(&["a", "b"]), "a and b");
        assert_eq!(join_spoken(&["a", "b", "c"]), "a, b, and c");
    }
}
