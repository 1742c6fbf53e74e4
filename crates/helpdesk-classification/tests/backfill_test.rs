//! Embedding backfill against a real SQLite store.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use common::FixedEmbedder;
use helpdesk_classification::{BackfillReport, EmbeddingBackfill};
use helpdesk_core::errors::{HelpdeskResult, ProviderError};
use helpdesk_core::models::HistoricalTicket;
use helpdesk_core::traits::{IEmbeddingProvider, ITicketStore, TicketAttribute};
use helpdesk_providers::TfIdfFallback;
use helpdesk_storage::TicketStore;

fn tickets(n: usize) -> Vec<HistoricalTicket> {
    (0..n)
        .map(|i| {
            HistoricalTicket::new(
                format!("T-{i:03}"),
                format!("Subject {i}"),
                format!("Description number {i}"),
                Some("Desktop Support".to_string()),
            )
        })
        .collect()
}

/// Batch calls always fail; single calls fail for ids containing "poison".
struct FlakyProvider {
    batch_calls: AtomicUsize,
}

impl IEmbeddingProvider for FlakyProvider {
    fn embed(&self, text: &str) -> HelpdeskResult<Vec<f32>> {
        if text.contains("poison") {
            return Err(ProviderError::RequestFailed {
                provider: "flaky".to_string(),
                reason: "bad input".to_string(),
            }
            .into());
        }
        Ok(vec![0.5, 0.5, 0.0])
    }

    fn embed_batch(&self, _texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::ProviderUnavailable {
            provider: "flaky".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

#[test]
fn embeds_everything_and_adds_attribute() {
    let store = TicketStore::open_in_memory().unwrap();
    store.insert_tickets(&tickets(23)).unwrap();
    assert!(!store.has_attribute(TicketAttribute::Embedding).unwrap());

    let report = EmbeddingBackfill::new(10)
        .run(&store, &TfIdfFallback::new(32))
        .unwrap();

    assert_eq!(
        report,
        BackfillReport {
            embedded: 23,
            failed: 0,
            remaining: 0
        }
    );
    assert_eq!(store.count_with_attribute(TicketAttribute::Embedding).unwrap(), 23);
    let stored = store.get_ticket("T-007").unwrap().unwrap();
    assert_eq!(stored.embedding.unwrap().len(), 32);
}

#[test]
fn second_run_is_a_no_op() {
    let store = TicketStore::open_in_memory().unwrap();
    store.insert_tickets(&tickets(5)).unwrap();
    let backfill = EmbeddingBackfill::new(2);
    backfill.run(&store, &FixedEmbedder::new()).unwrap();

    let again = backfill.run(&store, &FixedEmbedder::new()).unwrap();
    assert_eq!(again, BackfillReport::default());
}

#[test]
fn batch_failure_falls_back_to_single_and_skips_failures() {
    let store = TicketStore::open_in_memory().unwrap();
    let mut batch = tickets(6);
    batch[2].description = "poison pill".to_string();
    batch[4].description = "another poison".to_string();
    store.insert_tickets(&batch).unwrap();

    let provider = FlakyProvider {
        batch_calls: AtomicUsize::new(0),
    };
    let report = EmbeddingBackfill::new(4).run(&store, &provider).unwrap();

    assert_eq!(report.embedded, 4);
    assert_eq!(report.failed, 2);
    assert_eq!(report.remaining, 2);
    // Terminates: the two poisoned tickets are not retried forever.
    assert!(provider.batch_calls.load(Ordering::SeqCst) <= 3);
}

#[test]
fn wrong_dimension_vectors_are_counted_as_failures() {
    struct Liar;
    impl IEmbeddingProvider for Liar {
        fn embed(&self, _text: &str) -> HelpdeskResult<Vec<f32>> {
            Ok(vec![1.0; 2])
        }
        fn embed_batch(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![1.0; 2]).collect())
        }
        fn dimensions(&self) -> usize {
            4
        }
        fn name(&self) -> &str {
            "liar"
        }
    }

    let store = TicketStore::open_in_memory().unwrap();
    store.insert_tickets(&tickets(3)).unwrap();
    let report = EmbeddingBackfill::default().run(&store, &Liar).unwrap();
    assert_eq!(report.embedded, 0);
    assert_eq!(report.failed, 3);
    assert_eq!(report.remaining, 3);
}
