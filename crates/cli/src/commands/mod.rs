//! Subcommand implementations and the wiring they share.

pub mod chat;
pub mod config_cmd;
pub mod doctor;
pub mod intake;
pub mod recommend;

use std::path::Path;
use std::sync::Arc;
use anyhow::{bail, Context};
use sandy_agent::{ConversationOrchestrator, OrchestratorSettings};
use sandy_config::AppConfig;
use sandy_core::profile::UserProfile;
use sandy_memory::InMemoryConversationStore;
use sandy_providers::CompletionGateway;

pub const DEFAULT_USER: &str = "local";

/// Load config and fail early with setup help when no API key is available.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config = AppConfig::load().context("Failed to load config")?;

    if !config.has_api_key() && config.default_provider != "ollama" {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    SANDY_API_KEY       = 'sk-...'        (generic)");
        eprintln!("    OPENAI_API_KEY      = 'sk-...'        (for OpenAI direct)");
        eprintln!("    OPENROUTER_API_KEY  = 'sk-or-v1-...'  (for OpenRouter)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        bail!("No API key found. See above for setup instructions.");
    }

    Ok(config)
}

/// Build the gateway for the configured default provider.
pub fn build_gateway(config: &AppConfig) -> Arc<CompletionGateway> {
    let provider = sandy_providers::default_provider(config);
    Arc::new(CompletionGateway::new(provider))
}

/// Wire an orchestrator with a fresh in-process memory store.
pub fn build_orchestrator(config: &AppConfig) -> ConversationOrchestrator {
    ConversationOrchestrator::new(
        build_gateway(config),
        Arc::new(InMemoryConversationStore::new()),
        OrchestratorSettings::from(config),
    )
}

/// Read a profile from a JSON file, or start an empty one for `user_id`.
pub fn load_profile(path: Option<&Path>, user_id: &str) -> anyhow::Result<UserProfile> {
    let Some(path) = path else {
        return Ok(UserProfile::new(user_id));
    };
    let profile = UserProfile::from_file(path).context("Failed to load profile")?;
    tracing::debug!(path = %path.display(), user_id = %profile.id, "Loaded profile");
    Ok(profile)
}
