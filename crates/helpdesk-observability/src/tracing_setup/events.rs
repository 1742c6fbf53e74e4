//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the final recommendation for a ticket.
pub fn ticket_classified(group: &str, confidence: u8, source: &str, matched_count: usize) {
    tracing::info!(
        event = "ticket_classified",
        group = %group,
        confidence = confidence,
        source = %source,
        matched_count = matched_count,
        "ticket classified"
    );
}

/// Log the similarity classifier falling back to an empty outcome.
pub fn similarity_degraded(reason: &str) {
    tracing::warn!(
        event = "similarity_degraded",
        reason = %reason,
        "similarity classification degraded"
    );
}

/// Log a self-healing repair on the historical store.
pub fn store_self_healed(repair: &str) {
    tracing::info!(
        event = "store_self_healed",
        repair = %repair,
        "historical store repaired"
    );
}

/// Log a terminal pattern classifier failure.
pub fn pattern_classification_failed(reason: &str) {
    tracing::warn!(
        event = "pattern_classification_failed",
        reason = %reason,
        "pattern classification failed"
    );
}

/// Log embedding backfill progress.
pub fn backfill_progress(embedded: usize, failed: usize, remaining: usize, provider: &str) {
    tracing::info!(
        event = "backfill_progress",
        embedded = embedded,
        failed = failed,
        remaining = remaining,
        provider = %provider,
        "embedding backfill progress"
    );
}

/// Log removal of an idle conversation session.
pub fn session_evicted(session_id: &str, idle_secs: u64) {
    tracing::debug!(
        event = "session_evicted",
        session_id = %session_id,
        idle_secs = idle_secs,
        "idle session evicted"
    );
}
