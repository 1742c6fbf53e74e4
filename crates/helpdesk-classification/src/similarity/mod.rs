//! Nearest-neighbour classifier over embedded historical tickets.
//!
//! Never returns an error to its caller. Every failure degrades to
//! `SimilarityOutcome { success: false, results: [], error: Some(reason) }`
//! so classification stays available on a cold-start system.

pub mod readiness;
pub mod tally;

use std::sync::Arc;

use helpdesk_core::config::SimilarityConfig;
use helpdesk_core::errors::HelpdeskResult;
use helpdesk_core::models::{ticket_text, SimilarityOutcome};
use helpdesk_core::traits::{IEmbeddingProvider, ITicketStore};
use helpdesk_observability::events;
use tracing::debug;

pub use readiness::{ensure_ready, inspect, StoreReadiness};
pub use tally::tally_neighbors;

pub struct SimilarityClassifier {
    embedder: Arc<dyn IEmbeddingProvider>,
    store: Arc<dyn ITicketStore>,
    config: SimilarityConfig,
}

impl SimilarityClassifier {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        store: Arc<dyn ITicketStore>,
        config: SimilarityConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            config,
        }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Classify a ticket by the groups of its nearest labelled neighbours.
    pub fn classify(&self, subject: &str, description: &str) -> SimilarityOutcome {
        match self.try_classify(subject, description) {
            Ok(outcome) => outcome,
            Err(e) => {
                let reason = e.to_string();
                events::similarity_degraded(&reason);
                SimilarityOutcome::failed(reason)
            }
        }
    }

    /// Fallible core of [`classify`](Self::classify): readiness check with
    /// self-healing, embed, search, tally.
    pub fn try_classify(
        &self,
        subject: &str,
        description: &str,
    ) -> HelpdeskResult<SimilarityOutcome> {
        let _span =
            helpdesk_observability::similarity_span!(self.config.top_k, self.config.threshold)
                .entered();

        ensure_ready(self.store.as_ref())?;

        let vector = self.embedder.embed(&ticket_text(subject, description))?;
        let neighbors =
            self.store
                .nearest_neighbors(&vector, self.config.threshold, self.config.top_k)?;
        let results = tally_neighbors(&neighbors);

        debug!(
            neighbors = neighbors.len(),
            groups = results.len(),
            "similarity classification complete"
        );
        Ok(SimilarityOutcome::succeeded(results, neighbors.len()))
    }
}
