//! Embedding backfill for historical tickets.
//!
//! Embeds tickets that lack a vector in batches and writes the vectors back
//! to the store. A failed batch falls back to embedding its tickets one by
//! one; tickets that still fail are skipped for the rest of the run.

use std::collections::HashSet;

use helpdesk_core::config::defaults::DEFAULT_EMBEDDING_BATCH_SIZE;
use helpdesk_core::config::EmbeddingConfig;
use helpdesk_core::errors::HelpdeskResult;
use helpdesk_core::models::HistoricalTicket;
use helpdesk_core::traits::{IEmbeddingProvider, ITicketStore, TicketAttribute};
use helpdesk_observability::events;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Outcome of one backfill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillReport {
    /// Tickets embedded and written back during this run.
    pub embedded: usize,
    /// Tickets whose embedding failed.
    pub failed: usize,
    /// Tickets still without an embedding when the run ended.
    pub remaining: usize,
}

#[derive(Debug, Clone)]
pub struct EmbeddingBackfill {
    batch_size: usize,
}

impl Default for EmbeddingBackfill {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_BATCH_SIZE)
    }
}

impl EmbeddingBackfill {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn from_config(config: &EmbeddingConfig) -> Self {
        Self::new(config.batch_size)
    }

    /// Embed every ticket lacking an embedding.
    ///
    /// Adds the embedding attribute first if the store lacks it. Store errors
    /// abort the run; provider errors are counted in `failed`.
    pub fn run(
        &self,
        store: &dyn ITicketStore,
        provider: &dyn IEmbeddingProvider,
    ) -> HelpdeskResult<BackfillReport> {
        let _span =
            helpdesk_observability::backfill_span!(provider.name(), self.batch_size).entered();

        let attribute = TicketAttribute::Embedding;
        if !store.has_attribute(attribute)? {
            store.add_attribute(attribute)?;
            events::store_self_healed(attribute.as_str());
        }

        let mut report = BackfillReport::default();
        let mut skipped: HashSet<String> = HashSet::new();

        loop {
            let batch: Vec<HistoricalTicket> = store
                .tickets_missing_embedding(self.batch_size + skipped.len())?
                .into_iter()
                .filter(|t| !skipped.contains(&t.id))
                .take(self.batch_size)
                .collect();
            if batch.is_empty() {
                break;
            }

            for (ticket, embedding) in embed_batch(&batch, provider) {
                match embedding {
                    Some(vector) => {
                        store.store_embedding(&ticket.id, &vector)?;
                        report.embedded += 1;
                    }
                    None => {
                        skipped.insert(ticket.id.clone());
                        report.failed += 1;
                    }
                }
            }

            report.remaining = store
                .count()?
                .saturating_sub(store.count_with_attribute(attribute)?);
            events::backfill_progress(
                report.embedded,
                report.failed,
                report.remaining,
                provider.name(),
            );
        }

        Ok(report)
    }
}

/// Embed one batch, pairing each ticket with its vector or `None` on failure.
fn embed_batch<'a>(
    tickets: &'a [HistoricalTicket],
    provider: &dyn IEmbeddingProvider,
) -> Vec<(&'a HistoricalTicket, Option<Vec<f32>>)> {
    let texts: Vec<String> = tickets.iter().map(HistoricalTicket::embedding_text).collect();
    let dims = provider.dimensions();
    let checked = |ticket: &HistoricalTicket, vector: Vec<f32>| {
        if vector.len() == dims {
            Some(vector)
        } else {
            warn!(
                ticket_id = %ticket.id,
                expected = dims,
                actual = vector.len(),
                "embedding has wrong dimensions"
            );
            None
        }
    };

    match provider.embed_batch(&texts) {
        Ok(vectors) if vectors.len() == tickets.len() => tickets
            .iter()
            .zip(vectors)
            .map(|(ticket, vector)| (ticket, checked(ticket, vector)))
            .collect(),
        result => {
            if let Err(e) = &result {
                warn!(error = %e, "batch embedding failed, falling back to individual");
            } else {
                warn!("batch embedding returned wrong count, falling back to individual");
            }
            tickets
                .iter()
                .zip(&texts)
                .map(|(ticket, text)| match provider.embed(text) {
                    Ok(vector) => (ticket, checked(ticket, vector)),
                    Err(e) => {
                        warn!(ticket_id = %ticket.id, error = %e, "individual embedding failed");
                        (ticket, None)
                    }
                })
                .collect()
        }
    }
}
