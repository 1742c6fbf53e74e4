//! Idle-session sweep.

use chrono::Duration;
use helpdesk_core::config::defaults::DEFAULT_IDLE_TIMEOUT_SECS;
use helpdesk_core::config::SessionConfig;
use helpdesk_observability::events;

use crate::store::InMemoryConversationStore;

/// [`DEFAULT_IDLE_TIMEOUT_SECS`] as a `Duration`.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::seconds(DEFAULT_IDLE_TIMEOUT_SECS as i64);

/// Remove sessions idle for longer than `idle_timeout`.
///
/// Returns the number of sessions removed.
pub fn cleanup_idle_sessions(
    store: &InMemoryConversationStore,
    idle_timeout: Duration,
) -> usize {
    let mut removed = 0;
    for id in store.session_ids() {
        // Idleness is re-checked under the entry lock, so a session that
        // received a turn since the id list was taken survives.
        if let Some(log) = store.remove_if_idle(&id, idle_timeout) {
            events::session_evicted(&id, log.idle_duration().num_seconds().max(0) as u64);
            removed += 1;
        }
    }
    removed
}

/// Sweep using the configured timeout.
pub fn cleanup_with_config(store: &InMemoryConversationStore, config: &SessionConfig) -> usize {
    // chrono caps durations at i64::MAX milliseconds.
    let secs = config.idle_timeout_secs.min(i64::MAX as u64 / 1_000) as i64;
    cleanup_idle_sessions(store, Duration::seconds(secs))
}
