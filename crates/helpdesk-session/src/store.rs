//! InMemoryConversationStore: concurrent per-session access via DashMap.

use chrono::Duration;
use dashmap::DashMap;
use helpdesk_core::config::SessionConfig;
use helpdesk_core::errors::{HelpdeskResult, SessionError};
use helpdesk_core::models::ChatTurn;
use helpdesk_core::traits::IConversationStore;
use tracing::trace;

use crate::context::ConversationLog;

/// Thread-safe conversation store bounded per session to one system turn
/// plus the last `max_turns` turns.
pub struct InMemoryConversationStore {
    sessions: DashMap<String, ConversationLog>,
    max_turns: usize,
}

impl InMemoryConversationStore {
    pub fn new(max_turns: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_turns,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.max_turns)
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Cloned snapshot of a session's log.
    pub fn snapshot(&self, session_id: &str) -> HelpdeskResult<ConversationLog> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| {
                SessionError::SessionNotFound {
                    session_id: session_id.to_string(),
                }
                .into()
            })
    }

    /// All session IDs.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    /// Remove a session only if it has been idle longer than `idle_timeout`.
    /// The check and the removal happen under the same shard lock.
    pub fn remove_if_idle(
        &self,
        session_id: &str,
        idle_timeout: Duration,
    ) -> Option<ConversationLog> {
        self.sessions
            .remove_if(session_id, |_, log| log.idle_duration() > idle_timeout)
            .map(|(_, log)| log)
    }

    /// Remove and return a session.
    pub fn remove(&self, session_id: &str) -> Option<ConversationLog> {
        self.sessions.remove(session_id).map(|(_, log)| log)
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl IConversationStore for InMemoryConversationStore {
    fn append(&self, session_id: &str, turn: ChatTurn) -> HelpdeskResult<()> {
        if session_id.trim().is_empty() {
            return Err(SessionError::EmptySessionId.into());
        }
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| ConversationLog::new(session_id.to_string()));
        let evicted = entry.push(turn, self.max_turns);
        if evicted > 0 {
            trace!(session_id = %session_id, evicted, "trimmed conversation tail");
        }
        Ok(())
    }

    fn history(&self, session_id: &str) -> HelpdeskResult<Vec<ChatTurn>> {
        if session_id.trim().is_empty() {
            return Err(SessionError::EmptySessionId.into());
        }
        Ok(self
            .sessions
            .get(session_id)
            .map(|log| log.history())
            .unwrap_or_default())
    }

    fn clear(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
