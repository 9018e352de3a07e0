//! Provider selection from configuration.
//!
//! Only the configured default provider is ever built. Its `[providers.<name>]`
//! table may override the API key and base URL; otherwise the top-level key
//! and the well-known endpoint for that provider name are used.

use std::sync::Arc;
use sandy_config::AppConfig;
use sandy_core::provider::Provider;
use tracing::{debug, warn};
use crate::openai_compat::OpenAiCompatProvider;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection details resolved for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    name: String,
    base_url: String,
    api_key: String,
}

fn select(config: &AppConfig) -> Selection {
    let name = config.default_provider.clone();
    let section = config.providers.get(&name);

    let api_key = section
        .and_then(|p| p.api_key.clone())
        .or_else(|| config.api_key.clone())
        .unwrap_or_default();

    let base_url = match section.and_then(|p| p.api_url.clone()) {
        Some(url) => url,
        None => known_base_url(&name).map(String::from).unwrap_or_else(|| {
            warn!(provider = %name, "Unknown provider without api_url, using the OpenAI endpoint");
            OPENAI_BASE_URL.to_string()
        }),
    };

    Selection {
        name,
        base_url,
        api_key,
    }
}

/// Build the configured default completion provider.
pub fn default_provider(config: &AppConfig) -> Arc<dyn Provider> {
    let Selection {
        name,
        base_url,
        api_key,
    } = select(config);
    debug!(provider = %name, %base_url, "Selected completion provider");
    Arc::new(OpenAiCompatProvider::new(name, base_url, api_key))
}

/// Endpoint for well-known OpenAI-compatible providers.
fn known_base_url(provider_name: &str) -> Option<&'static str> {
    match provider_name {
        "openai" => Some(OPENAI_BASE_URL),
        "openrouter" => Some("https://openrouter.ai/api/v1"),
        "ollama" => Some("http://localhost:11434/v1"),
        "groq" => Some("https://api.groq.com/openai/v1"),
        "together" => Some("https://api.together.xyz/v1"),
        "vllm" => Some("http://localhost:8000/v1"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandy_config::ProviderConfig;

    #[test]
    fn default_config_selects_openai() {
        let config = AppConfig {
            api_key: Some("sk-top".into()),
            ..AppConfig::default()
        };
        let selection = select(&config);
        assert_eq!(selection.name, "openai");
        assert_eq!(selection.base_url, OPENAI_BASE_URL);
        assert_eq!(selection.api_key, "sk-top");
        assert_eq!(default_provider(&config).name(), "openai");
    }

    #[test]
    fn provider_table_overrides_key_and_url() {
        let mut config = AppConfig {
            api_key: Some("sk-top".into()),
            default_provider: "openrouter".into(),
            ..AppConfig::default()
        };
        config.providers.insert(
            "openrouter".into(),
            ProviderConfig {
                api_key: Some("sk-or".into()),
                api_url: Some("https://proxy.internal/v1".into()),
                default_model: None,
            },
        );
        let selection = select(&config);
        assert_eq!(selection.api_key, "sk-or");
        assert_eq!(selection.base_url, "https://proxy.internal/v1");
    }

    #[test]
    fn well_known_names_use_their_endpoint() {
        let config = AppConfig {
            default_provider: "ollama".into(),
            ..AppConfig::default()
        };
        let selection = select(&config);
        assert!(selection.base_url.contains("localhost:11434"));
        assert_eq!(selection.api_key, "");
    }

    #[test]
    fn unknown_provider_falls_back_to_openai_endpoint() {
        let config = AppConfig {
            default_provider: "mystery".into(),
            ..AppConfig::default()
        };
        let selection = select(&config);
        assert_eq!(selection.name, "mystery");
        assert_eq!(selection.base_url, OPENAI_BASE_URL);
    }
}
