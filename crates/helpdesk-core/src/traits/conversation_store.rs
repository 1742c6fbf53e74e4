use crate::errors::HelpdeskResult;
use crate::models::ChatTurn;

/// Keyed per-session conversation log.
///
/// Implementations keep at most one system turn plus a bounded tail of the
/// most recent turns.
pub trait IConversationStore: Send + Sync {
    /// Append a turn to a session, creating the session on first use.
    fn append(&self, session_id: &str, turn: ChatTurn) -> HelpdeskResult<()>;

    /// The retained turns for a session, oldest first. Unknown sessions are empty.
    fn history(&self, session_id: &str) -> HelpdeskResult<Vec<ChatTurn>>;

    /// Drop a session. Returns whether it existed.
    fn clear(&self, session_id: &str) -> bool;

    /// Number of live sessions.
    fn session_count(&self) -> usize;
}
