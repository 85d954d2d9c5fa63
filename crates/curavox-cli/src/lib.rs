#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod commands;
pub mod console;
pub mod parser;
pub mod settings_store;

pub use bootstrap::{bootstrap, bootstrap_one_shot, CliConfig, CliContext, OneShotContext};
pub use commands::Commands;
pub use parser::Cli;
pub use settings_store::JsonSettingsRepository;

// tracing-subscriber is initialized in main.rs only
use tracing_subscriber as _;
