//! Per-user session store
//!
//! One live conversation per user, keyed by the chat-platform identifier.
//! Each conversation sits behind its own async mutex so one user's turns
//! serialize while different users proceed concurrently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::dialog::Conversation;

/// Shared handle to one user's conversation
pub type SharedConversation = Arc<Mutex<Conversation>>;

/// In-memory session store
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<i64, SharedConversation>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the user's live conversation, if any
    pub fn get(&self, external_id: i64) -> Option<SharedConversation> {
        self.sessions
            .get(&external_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Replace the user's conversation with a fresh one (reset-stack)
    pub fn reset(&self, external_id: i64) -> SharedConversation {
        let conversation = Arc::new(Mutex::new(Conversation::new()));
        self.sessions.insert(external_id, Arc::clone(&conversation));
        conversation
    }

    /// Drop the user's conversation
    pub fn remove(&self, external_id: i64) {
        self.sessions.remove(&external_id);
    }

    /// Number of live conversations
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
