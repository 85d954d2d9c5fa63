//! Utterance normalization.

/// Normalize a raw transcript into canonical matching form.
///
/// Lowercases and trims surrounding whitespace - nothing else. Punctuation
/// is deliberately left alone; pattern anchors account for it where it
/// matters. Pure and total.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Tell me about Aspirin  "), "tell me about aspirin");
    }

    #[test]
    fn punctuation_is_preserved() {
        assert_eq!(normalize("Help!"), "help!");
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn handles_non_ascii() {
        assert_eq!(normalize("IBUPROFÈNE"), "ibuprofène");
    }
}
