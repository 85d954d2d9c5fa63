//! Subcommand definitions.

use clap::Subcommand;

/// Available commands for the voice dispatcher console.
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (one utterance per line, Ctrl-D to exit)
    Run,

    /// Dispatch a single utterance and exit
    Say {
        /// The utterance, as a recognizer would deliver it
        utterance: String,
    },

    /// List every recognized voice command
    Commands,

    /// Show the effective voice settings
    Settings,
}
