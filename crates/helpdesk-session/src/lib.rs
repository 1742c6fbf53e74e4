//! # helpdesk-session
//!
//! Per-session conversation history for the chat layer. Each session keeps
//! its first system turn plus a bounded tail of recent turns; idle sessions
//! are swept by [`cleanup_idle_sessions`].

pub mod cleanup;
pub mod context;
pub mod store;

pub use cleanup::{cleanup_idle_sessions, cleanup_with_config, DEFAULT_IDLE_TIMEOUT};
pub use context::ConversationLog;
pub use store::InMemoryConversationStore;
