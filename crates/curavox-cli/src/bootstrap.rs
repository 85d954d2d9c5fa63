//! CLI bootstrap - the composition root.
//!
//! The only place where ports are wired to concrete adapters: console
//! speech/UI adapters, the JSON settings store, and the backend search
//! client. Command handlers receive the composed context and never touch
//! infrastructure directly.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use url::Url;

use curavox_core::events::AppEvent;
use curavox_core::settings::Settings;
use curavox_api::{ApiConfig, DefaultSearchClient};
use curavox_dispatch::{
    ActionBridge, ChannelEmitter, CommandTable, RecognitionSession, SpeechGuard, SpeechParams,
};

use crate::console::{ConsoleRecognizer, ConsoleSynthesizer, ConsoleUi};
use crate::settings_store::JsonSettingsRepository;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Backend base URL override (`--api-url` or `CURAVOX_API_URL`).
    pub api_url: Option<String>,
    /// Settings store location.
    pub settings_repo: JsonSettingsRepository,
}

impl CliConfig {
    /// Config with the platform-default settings location.
    #[must_use]
    pub fn with_defaults(api_url: Option<String>) -> Self {
        Self {
            api_url,
            settings_repo: JsonSettingsRepository::at_default_location(),
        }
    }
}

/// Fully composed context for an interactive session.
pub struct CliContext {
    /// The recognition session, ready to start.
    pub session: RecognitionSession,
    /// Dispatcher events, for consumers that want to observe them.
    pub events: mpsc::UnboundedReceiver<AppEvent>,
    /// The settings in effect.
    pub settings: Settings,
}

/// Composed parts for one-shot dispatch (`curavox say`).
///
/// Skips the session manager: the caller resolves the utterance itself
/// and can await the lookup handle before exiting.
pub struct OneShotContext {
    /// The command vocabulary.
    pub table: CommandTable,
    /// The action executor.
    pub bridge: ActionBridge,
    /// Dispatcher events.
    pub events: mpsc::UnboundedReceiver<AppEvent>,
}

struct Wiring {
    speech: SpeechGuard,
    bridge: ActionBridge,
    events: mpsc::UnboundedReceiver<AppEvent>,
    emitter: ChannelEmitter,
    settings: Settings,
}

/// Load settings, falling back to defaults when the store is unreadable.
pub fn load_settings(repo: &JsonSettingsRepository) -> Settings {
    use curavox_core::ports::SettingsRepository;

    match repo.load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load settings, using defaults");
            Settings::with_defaults()
        }
    }
}

/// Resolve the backend base URL: flag/env first, then stored settings,
/// then the built-in default.
fn resolve_base_url(config: &CliConfig, settings: &Settings) -> Result<Url> {
    let candidate = config
        .api_url
        .as_deref()
        .or(settings.api_base_url.as_deref());

    match candidate {
        Some(raw) => Url::parse(raw).with_context(|| format!("invalid backend URL: {raw}")),
        None => Ok(ApiConfig::default().base_url),
    }
}

fn wire(config: &CliConfig) -> Result<Wiring> {
    let settings = load_settings(&config.settings_repo);

    let base_url = resolve_base_url(config, &settings)?;
    let api_config = ApiConfig {
        base_url,
        ..ApiConfig::default()
    };
    let search = Arc::new(DefaultSearchClient::new(&api_config));

    let (emitter, events) = ChannelEmitter::new();
    let ui = Arc::new(ConsoleUi);

    let speech = SpeechGuard::new(
        Arc::new(ConsoleSynthesizer),
        Arc::clone(&ui) as Arc<dyn curavox_core::ports::UiSurface>,
        Arc::new(emitter.clone()),
        SpeechParams::from_settings(&settings),
    )
    .with_voice_feedback(settings.voice_feedback_enabled());

    let bridge = ActionBridge::new(
        ui as Arc<dyn curavox_core::ports::UiSurface>,
        speech.clone(),
    )
    .with_search(search);

    Ok(Wiring {
        speech,
        bridge,
        events,
        emitter,
        settings,
    })
}

/// Compose the full interactive context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let wiring = wire(config)?;
    let history_capacity = wiring.settings.effective_history_capacity();

    let session = RecognitionSession::new(
        Box::new(ConsoleRecognizer::new()),
        CommandTable::builtin(),
        wiring.bridge,
        wiring.speech,
        Arc::new(wiring.emitter),
        history_capacity,
    );

    Ok(CliContext {
        session,
        events: wiring.events,
        settings: wiring.settings,
    })
}

/// Compose the one-shot context.
pub fn bootstrap_one_shot(config: &CliConfig) -> Result<OneShotContext> {
    let wiring = wire(config)?;
    Ok(OneShotContext {
        table: CommandTable::builtin(),
        bridge: wiring.bridge,
        events: wiring.events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use curavox_core::domain::SessionState;

    fn temp_config() -> (tempfile::TempDir, CliConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            api_url: None,
            settings_repo: JsonSettingsRepository::new(dir.path().join("settings.json")),
        };
        (dir, config)
    }

    #[test]
    fn bootstrap_produces_an_idle_session() {
        let (_dir, config) = temp_config();
        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.session.state(), SessionState::Idle);
        assert_eq!(ctx.settings, Settings::with_defaults());
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let (_dir, mut config) = temp_config();
        config.api_url = Some("not a url".to_string());
        assert!(bootstrap(&config).is_err());
    }

    #[test]
    fn stored_base_url_is_used_when_no_flag_is_given() {
        let (_dir, config) = temp_config();
        let mut settings = Settings::with_defaults();
        settings.api_base_url = Some("http://medserver:8080".to_string());

        let url = resolve_base_url(&config, &settings).unwrap();
        assert_eq!(url.as_str(), "http://medserver:8080/");
    }

    #[test]
    fn flag_overrides_stored_base_url() {
        let (_dir, mut config) = temp_config();
        config.api_url = Some("http://flag:1234".to_string());
        let mut settings = Settings::with_defaults();
        settings.api_base_url = Some("http://stored:8080".to_string());

        let url = resolve_base_url(&config, &settings).unwrap();
        assert_eq!(url.as_str(), "http://flag:1234/");
    }
}
