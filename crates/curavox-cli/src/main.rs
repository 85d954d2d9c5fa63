//! Console entry point.
//!
//! Wires the dispatcher to console adapters and drives it from stdin: each
//! typed line is treated as one finalized recognizer transcript.

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use curavox_cli::{bootstrap, bootstrap_one_shot, Cli, CliConfig, CliContext, Commands};
use curavox_core::ports::RecognizerEvent;
use curavox_dispatch::{ArgArity, CommandTable};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = CliConfig::with_defaults(cli.api_url.clone());

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Run => run_interactive(bootstrap(&config)?).await,
        Commands::Say { utterance } => say_once(&config, &utterance).await,
        Commands::Commands => {
            print_vocabulary(&CommandTable::builtin());
            Ok(())
        }
        Commands::Settings => {
            show_settings(&config);
            Ok(())
        }
    }
}

/// Interactive loop: one utterance per line until EOF or "stop listening".
async fn run_interactive(ctx: CliContext) -> Result<()> {
    let CliContext {
        mut session,
        mut events,
        ..
    } = ctx;

    // Keep the event channel drained; the console adapters already print
    // the user-visible output.
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            tracing::debug!(?event, "App event");
        }
    });

    session.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while session.is_listening() {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        session.handle_event(RecognizerEvent::Transcript {
            text: line,
            is_final: true,
        });
    }

    session.stop();
    Ok(())
}

/// Dispatch one utterance and wait for any backend lookup to finish.
async fn say_once(config: &CliConfig, utterance: &str) -> Result<()> {
    let ctx = bootstrap_one_shot(config)?;
    // Receiver must outlive the dispatch so emitted events are not dropped.
    let _events = ctx.events;

    let normalized = curavox_dispatch::normalize(utterance);
    match ctx.table.resolve(&normalized) {
        Some(command) => {
            if let Some(handle) = ctx.bridge.execute(&command) {
                handle.await?;
            }
        }
        None => {
            println!("No command matched: {normalized:?}");
            println!("Run `curavox commands` to list the recognized phrases.");
        }
    }
    Ok(())
}

/// Print the full voice vocabulary.
fn print_vocabulary(table: &CommandTable) {
    println!("Exact phrases:");
    let mut phrases: Vec<&str> = table.exact_phrases().map(|(phrase, _)| phrase).collect();
    phrases.sort_unstable();
    for phrase in phrases {
        println!("  {phrase}");
    }

    println!();
    println!("Phrases taking a medicine name:");
    for entry in table.parameterized() {
        match entry.arity {
            ArgArity::One => println!("  {}<medicine>", entry.pattern),
            ArgArity::Two => println!("  {}<medicine> and <medicine>", entry.pattern),
        }
    }
}

/// Print the effective settings.
fn show_settings(config: &CliConfig) {
    let settings = curavox_cli::bootstrap::load_settings(&config.settings_repo);
    println!("settings file:    {}", config.settings_repo.path().display());
    println!("speech rate:      {}", settings.effective_speech_rate());
    println!("speech pitch:     {}", settings.effective_speech_pitch());
    println!("speech volume:    {}", settings.effective_speech_volume());
    println!("locale:           {}", settings.effective_locale());
    println!("history capacity: {}", settings.effective_history_capacity());
    println!("voice feedback:   {}", settings.voice_feedback_enabled());
    println!(
        "backend URL:      {}",
        settings.api_base_url.as_deref().unwrap_or("(default)")
    );
}
