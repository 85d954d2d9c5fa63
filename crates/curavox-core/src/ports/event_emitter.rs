//! Event emitter trait for cross-crate event broadcasting.
//!
//! Implementations handle transport details (channels, web sockets, logs);
//! the dispatcher only ever sees this trait.

use crate::events::AppEvent;

/// Trait for emitting application events.
///
/// Keeps channel types out of the public API surface: the session manager
/// and speech guard emit through this trait and never name a transport.
pub trait AppEventEmitter: Send + Sync {
    /// Emit an application event.
    ///
    /// Must not block; implementations buffer or drop as appropriate.
    fn emit(&self, event: AppEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// Enables cloning of `Arc<dyn AppEventEmitter>` holders without
    /// requiring `Clone` on the underlying type.
    fn clone_box(&self) -> Box<dyn AppEventEmitter>;
}

/// A no-op event emitter for tests and contexts without listeners.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AppEventEmitter for NoopEmitter {
    fn emit(&self, _event: AppEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}
