//! Conversation orchestration for the Sandy support assistant.
//!
//! A chat turn flows through four stages:
//!
//! 1. **Build the system message** from a template, the user's profile and
//!    the request context
//! 2. **Assemble the request** from that message, the user's recent memory
//!    and the new message
//! 3. **Call the completion gateway**
//! 4. **Interpret the reply**: remember the exchange, detect intent, score
//!    confidence and suggest follow-ups
//!
//! Recommendations, intake answers and summaries are one-shot variations on
//! the same flow. Every operation falls back to a fixed result when the
//! completion call fails.

pub mod interpreter;
pub mod orchestrator;
pub mod prompts;
pub mod system_message;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use interpreter::Intent;
pub use orchestrator::{
    AiResponse, ChatResponse, ConversationOrchestrator, OrchestratorSettings, RecommendationSet,
};
pub use prompts::PromptTemplate;
pub use system_message::{build_system_message, ChatContext};
