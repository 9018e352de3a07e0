//! In-memory conversation store: per-user logs kept in a map.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use sandy_core::memory::{trim_oldest, ConversationStore, MAX_MEMORY_MESSAGES};
use sandy_core::message::ConversationMessage;
use tracing::trace;

/// Conversation memory held in process.
///
/// Every operation takes the lock for the duration of one synchronous call,
/// so a single op is atomic. Sequences of ops from concurrent callers for the
/// same user are not serialized and may interleave.
pub struct InMemoryConversationStore {
    logs: RwLock<HashMap<String, Vec<ConversationMessage>>>,
    cap: usize,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::with_cap(MAX_MEMORY_MESSAGES)
    }

    /// A store that keeps at most `cap` messages per user.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            logs: RwLock::new(HashMap::new()),
            cap,
        }
    }

    // A poisoned lock still holds consistent data: every write completes
    // before anything that could panic.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<ConversationMessage>>> {
        self.logs.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<ConversationMessage>>> {
        self.logs.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore for InMemoryConversationStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn append(&self, user_id: &str, messages: Vec<ConversationMessage>) {
        if messages.is_empty() {
            return;
        }
        let mut logs = self.write();
        let log = logs.entry(user_id.to_string()).or_default();
        log.extend(messages);
        trim_oldest(log, self.cap);
        trace!(user_id, len = log.len(), "Appended to conversation memory");
    }

    fn recent_window(&self, user_id: &str, n: usize) -> Vec<ConversationMessage> {
        let logs = self.read();
        match logs.get(user_id) {
            Some(log) => {
                let start = log.len().saturating_sub(n);
                log[start..].to_vec()
            }
            None => Vec::new(),
        }
    }

    fn trim(&self, user_id: &str, max: usize) {
        if let Some(log) = self.write().get_mut(user_id) {
            trim_oldest(log, max);
        }
    }

    fn clear(&self, user_id: &str) {
        self.write().remove(user_id);
    }

    fn len(&self, user_id: &str) -> usize {
        self.read().get(user_id).map_or(0, Vec::len)
    }

    fn user_count(&self) -> usize {
        self.read().len()
    }
}
