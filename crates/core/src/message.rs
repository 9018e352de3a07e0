//! Message domain types.
//!
//! Two shapes flow through the system:
//! - [`ChatMessage`] is what gets sent to the completion API (role + content).
//! - [`ConversationMessage`] is what gets remembered about an exchange with a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role of a message in a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that define the assistant's behavior
    System,
    /// The end user
    User,
    /// The AI assistant
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single role/content pair in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

}

/// Who spoke in a remembered exchange. System instructions are never remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationRole {
    User,
    Assistant,
}

impl From<ConversationRole> for Role {
    fn from(role: ConversationRole) -> Self {
        match role {
            ConversationRole::User => Role::User,
            ConversationRole::Assistant => Role::Assistant,
        }
    }
}

/// A single remembered message in a user's conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    /// Unique message ID
    pub id: String,

    /// The user this exchange belongs to
    pub user_id: String,

    /// Who sent this message
    pub role: ConversationRole,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,

    /// Optional metadata (intent, suggestions, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ConversationMessage {
    /// Create a new user message.
    pub fn user(user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(user_id, ConversationRole::User, content)
    }

    /// Create a new assistant message.
    pub fn assistant(user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(user_id, ConversationRole::Assistant, content)
    }

    fn new(user_id: impl Into<String>, role: ConversationRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    /// Attach metadata, consuming the message.
    pub fn with_metadata(mut self, metadata: serde_json::Map<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Project this message into a completion request entry.
    pub fn to_chat_message(&self) -> ChatMessage {
        ChatMessage {
            role: self.role.into(),
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = ConversationMessage::user("u1", "Hello, Sandy!");
        assert_eq!(msg.role, ConversationRole::User);
        assert_eq!(msg.user_id, "u1");
        assert_eq!(msg.content, "Hello, Sandy!");
        assert!(msg.metadata.is_none());
    }

    #[test]
    fn conversation_message_projects_to_chat_message() {
        let msg = ConversationMessage::assistant("u1", "Hi there");
        let chat = msg.to_chat_message();
        assert_eq!(chat.role, Role::Assistant);
        assert_eq!(chat.content, "Hi there");
    }

    #[test]
    fn message_serializes_camel_case() {
        let msg = ConversationMessage::user("u1", "Test message");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["role"], "user");
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn metadata_is_attached_and_serialized() {
        let mut meta = serde_json::Map::new();
        meta.insert("intent".into(), "help_request".into());
        let msg = ConversationMessage::assistant("u1", "Sure").with_metadata(meta);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["metadata"]["intent"], "help_request");
    }

    #[test]
    fn role_names() {
        assert_eq!(Role::System.as_str(), "system");
        assert_eq!(Role::from(ConversationRole::User), Role::User);
    }
}
