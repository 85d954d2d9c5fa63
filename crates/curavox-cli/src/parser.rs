//! Top-level CLI parser.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the CuraVox voice dispatcher.
#[derive(Parser)]
#[command(name = "curavox")]
#[command(about = "Voice-command dispatcher for hands-free medicine management")]
#[command(version)]
pub struct Cli {
    /// Base URL of the medicine search backend
    #[arg(long = "api-url", global = true, env = "CURAVOX_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
