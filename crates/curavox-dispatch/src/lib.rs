#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod bridge;
pub mod emitter;
pub mod knowledge;
pub mod matcher;
pub mod normalize;
pub mod session;
pub mod speech;
pub mod table;

// Re-export key types for convenience
pub use bridge::ActionBridge;
pub use emitter::ChannelEmitter;
pub use knowledge::KnowledgeBase;
pub use matcher::{CommandArgument, MatchedCommand};
pub use normalize::normalize;
pub use session::RecognitionSession;
pub use speech::{SpeechGuard, SpeechParams};
pub use table::{ActionId, ArgArity, CommandEntry, CommandTable, MatchKind};

// Silence unused dev-dependency warnings - async-trait is used by the
// integration tests' mock search port only.
#[cfg(test)]
use async_trait as _;
