//! Similarity classifier against each store state: empty history, missing
//! capability, missing attribute, no embeddings, no labelled history, ready.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{neighbor, FixedEmbedder, MockState, MockStore};
use helpdesk_classification::similarity::{ensure_ready, inspect};
use helpdesk_classification::{EmbeddingBackfill, SimilarityClassifier, StoreReadiness};
use helpdesk_core::config::SimilarityConfig;
use helpdesk_core::errors::HelpdeskError;
use helpdesk_core::models::HistoricalTicket;
use helpdesk_core::traits::{ITicketStore, StoreCapability};
use helpdesk_providers::TfIdfFallback;
use helpdesk_storage::TicketStore;

fn classifier(store: &Arc<MockStore>, embedder: &Arc<FixedEmbedder>) -> SimilarityClassifier {
    SimilarityClassifier::new(embedder.clone(), store.clone(), SimilarityConfig::default())
}

#[test]
fn ready_store_tallies_neighbours() {
    let store = Arc::new(MockStore::ready(vec![
        neighbor("Security", 0.93),
        neighbor("Security", 0.90),
        neighbor("Email & Collaboration", 0.81),
        neighbor("Security", 0.77),
        neighbor("Email & Collaboration", 0.62),
    ]));
    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("Phishing", "Bad link");

    assert!(outcome.success);
    assert!(outcome.error.is_none());
    assert_eq!(outcome.matched_count, 5);
    assert_eq!(outcome.results.len(), 2);
    assert_eq!(outcome.results[0].name, "Security");
    assert_eq!(outcome.results[0].confidence.value(), 60);
    assert_eq!(outcome.results[0].count, 3);
    assert_eq!(outcome.results[1].confidence.value(), 40);
}

#[test]
fn search_uses_configured_threshold_and_top_k() {
    let store = Arc::new(MockStore::ready(vec![neighbor("Security", 0.9)]));
    let embedder = Arc::new(FixedEmbedder::new());
    let config = SimilarityConfig {
        threshold: 0.65,
        top_k: 3,
    };
    SimilarityClassifier::new(embedder, store.clone(), config).classify("s", "d");
    assert_eq!(store.snapshot().last_query, Some((0.65, 3)));
}

#[test]
fn default_search_is_threshold_half_top_five() {
    let store = Arc::new(MockStore::ready(vec![]));
    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("s", "d");
    assert!(outcome.success);
    assert!(outcome.results.is_empty());
    assert_eq!(store.snapshot().last_query, Some((0.5, 5)));
}

#[test]
fn empty_history_is_insufficient_and_skips_embedding() {
    let store = Arc::new(MockStore::new(MockState::default()));
    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("s", "d");

    assert!(!outcome.success);
    assert!(outcome.results.is_empty());
    assert!(outcome.error.unwrap().starts_with("insufficient history"));
    assert_eq!(embedder.calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.snapshot().enable_calls, 0);
}

#[test]
fn unreachable_store_degrades() {
    let store = Arc::new(MockStore::new(MockState {
        unreachable: true,
        ..MockState::default()
    }));
    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("s", "d");
    assert!(!outcome.success);
    assert!(outcome.error.unwrap().starts_with("ticket store unavailable"));
}

#[test]
fn missing_capability_and_attribute_are_healed_in_one_call() {
    let store = Arc::new(MockStore::new(MockState {
        tickets: 10,
        embedded: 4,
        neighbors: vec![neighbor("Server Operations", 0.8)],
        ..MockState::default()
    }));
    assert_eq!(inspect(store.as_ref()).unwrap(), StoreReadiness::MissingCapability);

    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("Disk full", "Server at 99%");

    assert!(outcome.success, "{:?}", outcome.error);
    let state = store.snapshot();
    assert!(state.capability && state.attribute);
    assert_eq!(state.enable_calls, 1);
    assert_eq!(state.add_calls, 1);
}

#[test]
fn freshly_added_attribute_without_embeddings_is_insufficient() {
    let store = Arc::new(MockStore::new(MockState {
        tickets: 10,
        capability: true,
        ..MockState::default()
    }));
    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("s", "d");

    assert!(!outcome.success);
    assert!(outcome.error.unwrap().contains("embedding"));
    assert_eq!(inspect(store.as_ref()).unwrap(), StoreReadiness::NoEmbeddings);
    assert_eq!(store.snapshot().add_calls, 1);
}

#[test]
fn embedded_but_unlabelled_history_is_insufficient() {
    let store = Arc::new(MockStore::new(MockState {
        tickets: 4,
        capability: true,
        attribute: true,
        embedded: 4,
        unlabelled_embedded: 4,
        neighbors: vec![neighbor("Security", 0.9)],
        ..MockState::default()
    }));
    assert_eq!(inspect(store.as_ref()).unwrap(), StoreReadiness::NoLabelledHistory);

    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("VPN down", "Cannot connect");

    assert!(!outcome.success);
    assert!(outcome.results.is_empty());
    assert!(outcome.error.unwrap().starts_with("insufficient history"));
    assert_eq!(embedder.calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.snapshot().last_query, None);
}

#[test]
fn one_labelled_embedded_ticket_is_enough() {
    let store = Arc::new(MockStore::new(MockState {
        unlabelled_embedded: 19,
        ..MockStore::ready(vec![neighbor("Security", 0.9)]).snapshot()
    }));
    assert_eq!(inspect(store.as_ref()).unwrap(), StoreReadiness::Ready);
}

#[test]
fn sqlite_store_with_only_unlabelled_tickets_degrades() {
    let store = Arc::new(TicketStore::open_in_memory().unwrap());
    store
        .insert_tickets(&[
            HistoricalTicket::new("U-1", "VPN down", "Tunnel drops every hour", None),
            HistoricalTicket::new("U-2", "VPN slow", "Throughput is poor", None),
        ])
        .unwrap();
    store.enable_capability(StoreCapability::VectorSearch).unwrap();
    let embedder = Arc::new(TfIdfFallback::new(64));
    let report = EmbeddingBackfill::default()
        .run(store.as_ref(), embedder.as_ref())
        .unwrap();
    assert_eq!(report.embedded, 2);

    let outcome = SimilarityClassifier::new(embedder, store, SimilarityConfig::default())
        .classify("VPN down", "Tunnel drops every hour");

    assert!(!outcome.success);
    assert_eq!(outcome.matched_count, 0);
    assert!(outcome.error.unwrap().contains("assigned group"));
}

#[test]
fn repair_that_does_not_take_effect_is_store_unavailable() {
    let store = Arc::new(MockStore::new(MockState {
        tickets: 3,
        capability_repair_is_noop: true,
        ..MockState::default()
    }));
    let err = ensure_ready(store.as_ref()).unwrap_err();
    assert!(matches!(err, HelpdeskError::StoreUnavailable { .. }));
    assert_eq!(store.snapshot().enable_calls, 1);
}

#[test]
fn failed_repair_is_store_unavailable() {
    let store = Arc::new(MockStore::new(MockState {
        tickets: 3,
        capability: true,
        attribute_repair_fails: true,
        ..MockState::default()
    }));
    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("s", "d");
    assert!(!outcome.success);
    assert!(outcome.error.unwrap().starts_with("ticket store unavailable"));
}

#[test]
fn repeated_calls_converge_without_corrupting_state() {
    let states = [
        MockState {
            tickets: 5,
            embedded: 5,
            neighbors: vec![neighbor("Security", 0.9)],
            ..MockState::default()
        },
        MockState {
            tickets: 5,
            ..MockState::default()
        },
        MockState {
            tickets: 5,
            capability_repair_is_noop: true,
            ..MockState::default()
        },
        MockState::default(),
    ];

    for initial in states {
        let store = Arc::new(MockStore::new(initial));
        let embedder = Arc::new(FixedEmbedder::new());
        let classifier = classifier(&store, &embedder);

        let first = classifier.classify("s", "d");
        let second = classifier.classify("s", "d");

        // By the second call the outcome is final and stable.
        let third = classifier.classify("s", "d");
        assert_eq!(second, third);
        if !second.success {
            let reason = second.error.clone().unwrap();
            assert!(
                reason.starts_with("insufficient history")
                    || reason.starts_with("ticket store unavailable"),
                "{reason}"
            );
        }
        if first.success {
            assert!(second.success);
        }

        let state = store.snapshot();
        assert!(state.enable_calls <= 3);
        assert!(state.add_calls <= 3);
    }
}

#[test]
fn embedding_failure_degrades() {
    let store = Arc::new(MockStore::ready(vec![neighbor("Security", 0.9)]));
    let embedder = Arc::new(FixedEmbedder::failing());
    let outcome = classifier(&store, &embedder).classify("s", "d");
    assert!(!outcome.success);
    assert!(outcome.error.unwrap().contains("provider"));
}

#[test]
fn search_failure_degrades() {
    let store = Arc::new(MockStore::new(MockState {
        search_fails: true,
        ..MockStore::ready(vec![]).snapshot()
    }));
    let embedder = Arc::new(FixedEmbedder::new());
    let outcome = classifier(&store, &embedder).classify("s", "d");
    assert!(!outcome.success);
    assert!(outcome.results.is_empty());
}
