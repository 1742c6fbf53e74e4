//! The `classify_ticket` entry point exposed to the chat layer.

use std::sync::Arc;

use helpdesk_core::errors::HelpdeskResult;
use helpdesk_core::models::TicketClassification;
use helpdesk_core::traits::{ICompletionProvider, IEmbeddingProvider, ITicketStore};
use helpdesk_core::HelpdeskConfig;
use helpdesk_observability::events;

use crate::pattern::PatternClassifier;
use crate::reconciler::Reconciler;
use crate::similarity::SimilarityClassifier;

/// Runs both classifiers concurrently and reconciles after the join.
pub struct TicketClassifier {
    pattern: PatternClassifier,
    similarity: SimilarityClassifier,
    reconciler: Reconciler,
}

impl TicketClassifier {
    pub fn new(
        pattern: PatternClassifier,
        similarity: SimilarityClassifier,
        reconciler: Reconciler,
    ) -> Self {
        Self {
            pattern,
            similarity,
            reconciler,
        }
    }

    /// Wire up all three parts from config and the given collaborators.
    pub fn from_config(
        config: &HelpdeskConfig,
        completion: Arc<dyn ICompletionProvider>,
        embedder: Arc<dyn IEmbeddingProvider>,
        store: Arc<dyn ITicketStore>,
    ) -> HelpdeskResult<Self> {
        let taxonomy = config.load_taxonomy()?;
        Ok(Self::new(
            PatternClassifier::new(completion, taxonomy)
                .with_temperature(config.completion.temperature),
            SimilarityClassifier::new(embedder, store, config.similarity.clone()),
            Reconciler::new(config.reconciliation.clone()),
        ))
    }

    pub fn pattern(&self) -> &PatternClassifier {
        &self.pattern
    }

    pub fn similarity(&self) -> &SimilarityClassifier {
        &self.similarity
    }

    /// Classify one ticket.
    ///
    /// A pattern classifier failure is returned as the error for the whole
    /// request, even when similarity succeeded. Similarity failures are
    /// carried inside the result.
    pub fn classify_ticket(
        &self,
        subject: &str,
        description: &str,
    ) -> HelpdeskResult<TicketClassification> {
        let _span = helpdesk_observability::classification_span!(subject).entered();

        let (pattern, similarity) = rayon::join(
            || self.pattern.classify(subject, description),
            || self.similarity.classify(subject, description),
        );
        let pattern = pattern?;

        let recommendation = self.reconciler.reconcile(&pattern, &similarity);
        events::ticket_classified(
            &recommendation.group,
            recommendation.confidence.value(),
            recommendation.source.as_str(),
            similarity.matched_count,
        );

        Ok(TicketClassification {
            pattern,
            similarity,
            recommendation,
        })
    }
}
