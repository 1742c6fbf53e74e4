/// Conversation-store errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {session_id}")]
    SessionNotFound { session_id: String },

    #[error("empty session id")]
    EmptySessionId,
}
