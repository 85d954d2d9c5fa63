//! Channel-backed event emitter.
//!
//! Bridges the [`AppEventEmitter`] port onto an unbounded tokio channel so
//! a UI event loop (or a test) can consume dispatcher events.

use tokio::sync::mpsc;

use curavox_core::events::AppEvent;
use curavox_core::ports::AppEventEmitter;

/// Emitter that forwards every event into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl ChannelEmitter {
    /// Create an emitter and the receiver for its events.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AppEventEmitter for ChannelEmitter {
    fn emit(&self, event: AppEvent) {
        // Best-effort: a dropped receiver is not an error for the sender.
        if self.tx.send(event).is_err() {
            tracing::warn!("App event receiver dropped");
        }
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}
