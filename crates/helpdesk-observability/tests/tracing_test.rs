use helpdesk_core::config::ObservabilityConfig;
use helpdesk_observability::{events, init_tracing_from_config, init_tracing_with_filter};

#[test]
fn second_init_reports_existing_subscriber() {
    let first = init_tracing_with_filter("debug");
    let second = init_tracing_from_config(&ObservabilityConfig::default());
    // Only one global subscriber can ever be installed per process.
    assert!(!(first && second));
}

#[test]
fn events_do_not_panic_without_subscriber() {
    events::ticket_classified("Security", 82, "combined", 9);
    events::similarity_degraded("no historical tickets");
    events::store_self_healed("vector-search");
    events::pattern_classification_failed("timeout");
    events::backfill_progress(10, 1, 0, "tfidf-fallback");
    events::session_evicted("abc", 7200);
}

#[test]
fn span_macros_expand() {
    let span = helpdesk_observability::classification_span!("VPN down");
    let _guard = span.enter();
    let _sim = helpdesk_observability::similarity_span!(5usize, 0.5f64);
    let _bf = helpdesk_observability::backfill_span!("tfidf", 50usize);
}
