//! The conversation orchestrator.
//!
//! Owns no state of its own beyond its collaborators: a [`CompletionGateway`]
//! for model calls and an injected [`ConversationStore`] for short-term
//! memory. Every public operation is total. Completion failures are logged
//! and turned into a fixed fallback result, never returned to the caller.
//!
//! Operations for the same user are not serialized. Two concurrent `chat`
//! calls may both read the same memory window and then append their
//! exchanges in either order.

use std::sync::Arc;
use chrono::{DateTime, Utc};
use sandy_core::memory::{ConversationStore, CHAT_CONTEXT_WINDOW};
use sandy_core::message::{ChatMessage, ConversationMessage};
use sandy_core::profile::UserProfile;
use sandy_core::provider::{ModelConfig, Usage};
use sandy_core::recommendation::Recommendation;
use sandy_providers::CompletionGateway;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use crate::interpreter::{
    detect_intent, generate_follow_ups, parse_recommendations_or_fallback, score_confidence,
    static_fallback_recommendations, Intent,
};
use crate::interpreter::followups::GENERIC_FOLLOW_UPS;
use crate::prompts::{self, PromptTemplate};
use crate::system_message::{build_system_message, ChatContext};

pub const CHAT_FAILURE_MESSAGE: &str =
    "I'm sorry, I'm having trouble responding right now. Please try again in a moment.";
pub const INTAKE_ACKNOWLEDGEMENT: &str =
    "Thank you for sharing that. I've noted your response and we can continue whenever you're ready.";
pub const NO_HISTORY_SUMMARY: &str = "No conversation history available.";
pub const SUMMARY_UNAVAILABLE: &str = "Unable to generate a conversation summary at this time.";
pub const RECOMMENDATIONS_FAILED: &str =
    "Could not generate personalized recommendations; showing general suggestions instead.";

/// Model settings per scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorSettings {
    pub chat: ModelConfig,
    pub recommendations: ModelConfig,
    pub intake: ModelConfig,
    pub summary: ModelConfig,
}

impl OrchestratorSettings {
    /// Defaults for every scenario using the given model.
    pub fn for_model(model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            chat: ModelConfig::new(model.clone(), 0.7, 500),
            recommendations: ModelConfig::new(model.clone(), 0.7, 800),
            intake: ModelConfig::new(model.clone(), 0.7, 400),
            summary: ModelConfig::new(model, 0.3, 300),
        }
    }
}

impl From<&sandy_config::AppConfig> for OrchestratorSettings {
    fn from(config: &sandy_config::AppConfig) -> Self {
        let model = config
            .providers
            .get(&config.default_provider)
            .and_then(|p| p.default_model.clone())
            .unwrap_or_else(|| config.default_model.clone());
        let scenario = |s: sandy_config::ModelSettings| {
            ModelConfig::new(model.clone(), s.temperature, s.max_tokens)
        };
        let assistant = &config.assistant;
        Self {
            chat: scenario(assistant.chat),
            recommendations: scenario(assistant.recommendations),
            intake: scenario(assistant.intake),
            summary: scenario(assistant.summary),
        }
    }
}

/// Reply to a chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub suggestions: Vec<String>,
    pub confidence: f32,
    pub intent: Intent,
    pub usage: Usage,
    pub created: DateTime<Utc>,
}

/// Recommendations, plus an error note when they came from the fallback set
/// because the completion call failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub usage: Usage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Plain text reply for one-shot scenarios such as intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    pub content: String,
    pub usage: Usage,
    pub created: DateTime<Utc>,
}

pub struct ConversationOrchestrator {
    gateway: Arc<CompletionGateway>,
    store: Arc<dyn ConversationStore>,
    settings: OrchestratorSettings,
}

impl ConversationOrchestrator {
    pub fn new(
        gateway: Arc<CompletionGateway>,
        store: Arc<dyn ConversationStore>,
        settings: OrchestratorSettings,
    ) -> Self {
        Self {
            gateway,
            store,
            settings,
        }
    }

    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    pub fn settings(&self) -> &OrchestratorSettings {
        &self.settings
    }

    /// Answer a chat message in the context of the user's recent history.
    ///
    /// On success the exchange is remembered in the store and recorded on the
    /// profile. On failure neither is touched and the reply is a fixed
    /// apology with zero confidence.
    pub async fn chat(
        &self,
        user_id: &str,
        message: &str,
        profile: &mut UserProfile,
        context: &ChatContext,
    ) -> ChatResponse {
        let system = build_system_message(PromptTemplate::Main, profile, context);
        let history = self.store.recent_window(user_id, CHAT_CONTEXT_WINDOW);

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(system));
        messages.extend(history.iter().map(ConversationMessage::to_chat_message));
        messages.push(ChatMessage::user(message));

        debug!(user_id, history = history.len(), crisis = context.is_crisis(), "Chat request");

        let intent = detect_intent(message);

        let completion = match self.gateway.complete(messages, &self.settings.chat).await {
            Ok(c) => c,
            Err(e) => {
                warn!(user_id, error = %e, "Chat completion failed, returning fallback reply");
                return ChatResponse {
                    message: CHAT_FAILURE_MESSAGE.to_string(),
                    suggestions: GENERIC_FOLLOW_UPS.map(String::from).to_vec(),
                    confidence: 0.0,
                    intent,
                    usage: Usage::default(),
                    created: Utc::now(),
                };
            }
        };

        let mut metadata = serde_json::Map::new();
        metadata.insert("intent".into(), intent.as_str().into());
        let exchange = vec![
            ConversationMessage::user(user_id, message),
            ConversationMessage::assistant(user_id, completion.text.clone()).with_metadata(metadata),
        ];
        self.store.append(user_id, exchange.clone());
        profile.record_exchange(exchange);

        let response = ChatResponse {
            suggestions: generate_follow_ups(profile, message),
            confidence: score_confidence(profile, message),
            intent,
            message: completion.text,
            usage: completion.usage,
            created: completion.created,
        };

        info!(
            user_id,
            intent = %response.intent,
            confidence = response.confidence,
            tokens = response.usage.total_tokens,
            "Chat exchange completed"
        );
        response
    }

    /// Ask the model for a numbered list of recommendations for the profile.
    pub async fn generate_recommendations(
        &self,
        profile: &UserProfile,
        area: Option<&str>,
    ) -> RecommendationSet {
        let messages = vec![
            ChatMessage::system(PromptTemplate::Recommendation.text()),
            ChatMessage::user(prompts::recommendation_prompt(profile, area)),
        ];

        match self
            .gateway
            .complete(messages, &self.settings.recommendations)
            .await
        {
            Ok(completion) => {
                let recommendations = parse_recommendations_or_fallback(&completion.text);
                info!(
                    user_id = %profile.id,
                    count = recommendations.len(),
                    "Recommendations generated"
                );
                RecommendationSet {
                    recommendations,
                    usage: completion.usage,
                    error: None,
                }
            }
            Err(e) => {
                warn!(user_id = %profile.id, error = %e, "Recommendation completion failed");
                RecommendationSet {
                    recommendations: static_fallback_recommendations(),
                    usage: Usage::default(),
                    error: Some(RECOMMENDATIONS_FAILED.to_string()),
                }
            }
        }
    }

    /// Respond to one answer of the intake questionnaire.
    pub async fn process_intake_response(
        &self,
        user_id: &str,
        response_text: &str,
        section: &str,
        profile: &UserProfile,
    ) -> AiResponse {
        let messages = vec![
            ChatMessage::system(build_system_message(
                PromptTemplate::Intake,
                profile,
                &ChatContext::default(),
            )),
            ChatMessage::user(prompts::intake_prompt(section, response_text, profile)),
        ];

        match self.gateway.complete(messages, &self.settings.intake).await {
            Ok(completion) => {
                info!(user_id, section, "Intake response processed");
                AiResponse {
                    content: completion.text,
                    usage: completion.usage,
                    created: completion.created,
                }
            }
            Err(e) => {
                warn!(user_id, section, error = %e, "Intake completion failed");
                AiResponse {
                    content: INTAKE_ACKNOWLEDGEMENT.to_string(),
                    usage: Usage::default(),
                    created: Utc::now(),
                }
            }
        }
    }

    /// Summarize the user's remembered conversation.
    pub async fn conversation_summary(&self, user_id: &str) -> String {
        if !self.store.has_history(user_id) {
            debug!(user_id, "No history to summarize");
            return NO_HISTORY_SUMMARY.to_string();
        }

        let recent = self.store.recent_window(user_id, CHAT_CONTEXT_WINDOW);

        let messages = vec![
            ChatMessage::system(PromptTemplate::Main.text()),
            ChatMessage::user(prompts::summary_prompt(&recent)),
        ];

        match self.gateway.complete(messages, &self.settings.summary).await {
            Ok(completion) => {
                info!(user_id, messages = recent.len(), "Conversation summarized");
                completion.text
            }
            Err(e) => {
                warn!(user_id, error = %e, "Summary completion failed");
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }

    /// Forget everything remembered for the user. Idempotent.
    pub fn clear_user_history(&self, user_id: &str) {
        self.store.clear(user_id);
        info!(user_id, "Conversation history cleared");
    }
}
