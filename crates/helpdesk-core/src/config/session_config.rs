use serde::{Deserialize, Serialize};

use super::defaults;

/// Conversation store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Non-system turns kept per session.
    pub max_turns: usize,
    /// Sessions idle longer than this are dropped by cleanup.
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: defaults::DEFAULT_MAX_TURNS,
            idle_timeout_secs: defaults::DEFAULT_IDLE_TIMEOUT_SECS,
        }
    }
}
