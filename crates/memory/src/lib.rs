//! Conversation memory implementations for Sandy.

pub mod in_memory;

pub use in_memory::InMemoryConversationStore;
