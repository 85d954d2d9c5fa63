//! Command resolution against the table.
//!
//! Exact match first, then parameterized patterns in priority order. No
//! fuzzy or typo tolerance - that is a deliberate simplicity boundary, not
//! an oversight: inputs come pre-normalized and the table's phrasing is
//! what the help text teaches.

use crate::table::{ArgArity, ActionId, CommandTable, MatchKind};

/// Argument(s) extracted from a parameterized utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArgument {
    /// No argument (exact command, or the argument was empty after trimming).
    None,
    /// One free-text argument.
    Single(String),
    /// Two arguments split on " and " (interaction checks).
    Pair(String, String),
}

impl CommandArgument {
    /// The first (or only) argument, when present.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Single(arg) | Self::Pair(arg, _) => Some(arg),
        }
    }

    /// Human-readable rendering for events and logs.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Single(arg) => Some(arg.clone()),
            Self::Pair(a, b) => Some(format!("{a} and {b}")),
        }
    }
}

/// A resolved command: the action plus any extracted argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedCommand {
    /// The action to execute.
    pub action: ActionId,
    /// Extracted argument text.
    pub argument: CommandArgument,
}

impl CommandTable {
    /// Resolve a normalized utterance to a command.
    ///
    /// Returns `None` when nothing matches; the caller owns the fallback
    /// ("didn't understand") feedback. An argument that trims to empty
    /// yields [`CommandArgument::None`] so the handler can prompt instead
    /// of issuing a lookup with an empty key.
    #[must_use]
    pub fn resolve(&self, normalized: &str) -> Option<MatchedCommand> {
        if let Some(action) = self.exact(normalized) {
            return Some(MatchedCommand {
                action,
                argument: CommandArgument::None,
            });
        }

        for entry in self.parameterized() {
            // Normalization trims the utterance, so a bare anchor ("tell me
            // about") arrives without the pattern's trailing space; it still
            // matches, with an empty argument, so the handler can prompt.
            let bare = entry.pattern.trim_end();
            let remainder = match entry.kind {
                MatchKind::Exact => continue,
                MatchKind::PrefixWithArg => normalized
                    .strip_prefix(entry.pattern)
                    .or_else(|| (normalized == bare).then_some("")),
                MatchKind::ContainsWithArg => normalized
                    .find(entry.pattern)
                    .map(|idx| &normalized[idx + entry.pattern.len()..])
                    .or_else(|| normalized.ends_with(bare).then_some("")),
            };

            if let Some(raw) = remainder {
                return Some(MatchedCommand {
                    action: entry.action,
                    argument: extract_argument(raw, entry.arity),
                });
            }
        }

        None
    }
}

/// Trim the raw remainder and shape it per the entry's arity.
fn extract_argument(raw: &str, arity: ArgArity) -> CommandArgument {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CommandArgument::None;
    }

    match arity {
        ArgArity::One => CommandArgument::Single(trimmed.to_string()),
        ArgArity::Two => match trimmed.split_once(" and ") {
            Some((first, second)) => {
                let first = first.trim();
                let second = second.trim();
                if first.is_empty() || second.is_empty() {
                    // "between and ibuprofen" - treat as one usable name at most
                    let survivor = if first.is_empty() { second } else { first };
                    CommandArgument::Single(survivor.to_string())
                } else {
                    CommandArgument::Pair(first.to_string(), second.to_string())
                }
            }
            // Only one medicine named; the handler prompts for the second.
            None => CommandArgument::Single(trimmed.to_string()),
        },
    }
}
