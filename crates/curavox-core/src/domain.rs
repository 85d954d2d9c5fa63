//! Pure domain types shared across the dispatcher and its adapters.

use serde::{Deserialize, Serialize};

/// One medicine entry as returned by the backend search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineSummary {
    /// Brand or product name.
    pub name: String,

    /// Generic (INN) name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,

    /// Short free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MedicineSummary {
    /// One-sentence spoken summary of this entry.
    #[must_use]
    pub fn spoken_summary(&self) -> String {
        let mut summary = self.name.clone();
        if let Some(ref generic) = self.generic_name {
            if !generic.eq_ignore_ascii_case(&self.name) {
                summary.push_str(", also known as ");
                summary.push_str(generic);
            }
        }
        summary.push('.');
        if let Some(ref description) = self.description {
            summary.push(' ');
            summary.push_str(description);
            if !description.ends_with('.') {
                summary.push('.');
            }
        }
        summary
    }
}

/// Navigable sections of the host application.
///
/// The dispatcher treats these as opaque navigation targets; the UI layer
/// decides what "navigating" to one of them actually means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiSection {
    /// Camera / packaging scanner view.
    Scanner,
    /// The user's personal medicine list.
    MedicineList,
    /// Dosage reminder schedule.
    Reminders,
    /// User profile.
    Profile,
    /// App settings.
    Settings,
}

impl UiSection {
    /// Human-readable label, used in spoken confirmations.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scanner => "scanner",
            Self::MedicineList => "your medicines",
            Self::Reminders => "reminders",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }
}

/// Named UI controls the action bridge can trigger.
///
/// Each maps to exactly one control in the host UI; the dispatcher never
/// holds a reference to the control itself (see [`crate::ports::UiSurface`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiControl {
    /// Start the packaging camera.
    StartCamera,
    /// Capture a photo from the running camera.
    CapturePhoto,
    /// Stop the packaging camera.
    StopCamera,
    /// Open the photo upload picker.
    UploadPhoto,
}

impl UiControl {
    /// Human-readable label, used in spoken confirmations.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartCamera => "start camera",
            Self::CapturePhoto => "capture photo",
            Self::StopCamera => "stop camera",
            Self::UploadPhoto => "upload photo",
        }
    }
}

/// State of the continuous recognition session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Not listening - no recognizer session active.
    Idle,
    /// Continuous recognition active; transcripts are being dispatched.
    Listening,
}

impl SessionState {
    /// State machine label (e.g. for status DTOs and logs).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Listening => "listening",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spoken_summary_includes_generic_name() {
        let med = MedicineSummary {
            name: "Aspirin".to_string(),
            generic_name: Some("acetylsalicylic acid".to_string()),
            description: Some("Pain reliever and blood thinner".to_string()),
        };
        let summary = med.spoken_summary();
        assert!(summary.starts_with("Aspirin, also known as acetylsalicylic acid."));
        assert!(summary.ends_with("Pain reliever and blood thinner."));
    }

    #[test]
    fn spoken_summary_skips_redundant_generic() {
        let med = MedicineSummary {
            name: "Ibuprofen".to_string(),
            generic_name: Some("ibuprofen".to_string()),
            description: None,
        };
        assert_eq!(med.spoken_summary(), "Ibuprofen.");
    }

    #[test]
    fn medicine_summary_uses_camel_case_wire_names() {
        let json = r#"{"name":"Tylenol","genericName":"acetaminophen"}"#;
        let med: MedicineSummary = serde_json::from_str(json).unwrap();
        assert_eq!(med.generic_name.as_deref(), Some("acetaminophen"));
        assert!(med.description.is_none());
    }

    #[test]
    fn session_state_labels() {
        assert_eq!(SessionState::Idle.label(), "idle");
        assert_eq!(SessionState::Listening.label(), "listening");
    }
}
