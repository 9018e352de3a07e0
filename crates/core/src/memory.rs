//! Conversation memory trait: short-term, per-user message logs.
//!
//! Each user gets an ordered log of the most recent exchanged messages, used to
//! build the context window of the next completion request. Logs are bounded:
//! after every append the oldest entries beyond [`MAX_MEMORY_MESSAGES`] are
//! evicted.
//!
//! Operations are synchronous and only ever touch the named user's log. An
//! unknown user simply has an empty log.

use crate::message::ConversationMessage;

/// Maximum number of messages kept per user.
pub const MAX_MEMORY_MESSAGES: usize = 20;

/// Number of remembered messages sent along with a chat request.
pub const CHAT_CONTEXT_WINDOW: usize = 10;

/// The core ConversationStore trait.
///
/// The store is created by whoever owns the orchestrator and injected into it;
/// dropping the store disposes of every log.
pub trait ConversationStore: Send + Sync {
    /// The backend name (e.g., "in_memory").
    fn name(&self) -> &str;

    /// Append messages to a user's log, creating it on first use, then trim
    /// it to [`MAX_MEMORY_MESSAGES`].
    fn append(&self, user_id: &str, messages: Vec<ConversationMessage>);

    /// The last `n` messages (or fewer) in chronological order.
    fn recent_window(&self, user_id: &str, n: usize) -> Vec<ConversationMessage>;

    /// Drop the oldest entries so that at most `max` remain.
    fn trim(&self, user_id: &str, max: usize);

    /// Delete the user's log entirely. Idempotent.
    fn clear(&self, user_id: &str);

    /// Number of messages currently held for a user.
    fn len(&self, user_id: &str) -> usize;

    /// Whether the user has any remembered messages.
    fn has_history(&self, user_id: &str) -> bool {
        self.len(user_id) > 0
    }

    /// Number of users with a live log.
    fn user_count(&self) -> usize;
}

/// Trim a chronological sequence from the oldest end so at most `max` remain.
pub fn trim_oldest<T>(items: &mut Vec<T>, max: usize) {
    if items.len() > max {
        let excess = items.len() - max;
        items.drain(..excess);
    }
}
