//! Completion gateway: the single door to the completion API.
//!
//! Wraps a [`Provider`] with a uniform request/response shape. Every provider
//! failure (transport, auth, rate limit, malformed response) comes out as a
//! [`CompletionFailure`]. The gateway never retries; choosing a fallback is
//! the caller's job.

use std::sync::Arc;
use chrono::{DateTime, Utc};
use sandy_core::error::CompletionFailure;
use sandy_core::message::ChatMessage;
use sandy_core::provider::{ModelConfig, Provider, ProviderRequest, Usage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A successful completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
    pub created: DateTime<Utc>,
}

pub struct CompletionGateway {
    provider: Arc<dyn Provider>,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Name of the provider behind this gateway.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send an ordered list of messages and return the generated text.
    pub async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        config: &ModelConfig,
    ) -> Result<Completion, CompletionFailure> {
        let request = ProviderRequest {
            model: config.model.clone(),
            messages,
            temperature: config.temperature.clamp(0.0, 2.0),
            max_tokens: Some(config.max_tokens),
        };

        debug!(
            provider = %self.provider.name(),
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = config.max_tokens,
            "Dispatching completion"
        );

        match self.provider.complete(request).await {
            Ok(response) => Ok(Completion {
                text: response.content,
                usage: response.usage.unwrap_or_default(),
                created: response.created,
            }),
            Err(err) => {
                warn!(provider = %self.provider.name(), error = %err, "Completion API call failed");
                Err(CompletionFailure::from(err))
            }
        }
    }

    /// Whether the provider is reachable. Failures count as unhealthy.
    pub async fn health_check(&self) -> bool {
        match self.provider.health_check().await {
            Ok(healthy) => healthy,
            Err(err) => {
                warn!(provider = %self.provider.name(), error = %err, "Health check failed");
                false
            }
        }
    }
}
