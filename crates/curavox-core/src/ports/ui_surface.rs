//! UI surface port - the dispatcher's only handle onto the host UI.
//!
//! The action bridge never queries or mutates UI elements directly; it
//! invokes opaque named controls and navigation targets through this trait,
//! and the UI layer decides what those mean.

use crate::domain::{UiControl, UiSection};

/// Capability interface implemented by the host UI layer.
pub trait UiSurface: Send + Sync {
    /// Activate the primary action of a named control.
    fn trigger_control(&self, control: UiControl);

    /// Navigate to an application section.
    fn navigate(&self, section: UiSection);

    /// Show text on the visible transcript/caption surface.
    ///
    /// Called for every spoken utterance so sighted or hard-of-hearing
    /// users get the same feedback; must succeed even when audio is
    /// unavailable.
    fn show_caption(&self, text: &str);
}

/// A no-op UI surface for tests and headless contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUiSurface;

impl UiSurface for NoopUiSurface {
    fn trigger_control(&self, _control: UiControl) {}
    fn navigate(&self, _section: UiSection) {}
    fn show_caption(&self, _text: &str) {}
}
