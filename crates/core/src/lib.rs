//! # Sandy Core
//!
//! Domain types, traits, and error definitions for the Sandy support assistant.
//! This crate has **zero framework dependencies**: it defines the domain model
//! that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every swappable subsystem (completion backend, conversation memory) is
//! defined as a trait here. Implementations live in their respective crates.

pub mod error;
pub mod message;
pub mod provider;
pub mod memory;
pub mod profile;
pub mod recommendation;

// Re-export key types at crate root for ergonomics
pub use error::{CompletionFailure, Error, ParseError, ProviderError, Result};
pub use message::{ChatMessage, ConversationMessage, ConversationRole, Role};
pub use provider::{ModelConfig, Provider, ProviderRequest, ProviderResponse, Usage};
pub use memory::{ConversationStore, CHAT_CONTEXT_WINDOW, MAX_MEMORY_MESSAGES};
pub use profile::{
    CommunicationStyle, Goals, PersonalInfo, Preferences, ProfileContext, ResponseLength,
    UserProfile, PROFILE_HISTORY_CAP,
};
pub use recommendation::{Difficulty, Priority, Recommendation};
