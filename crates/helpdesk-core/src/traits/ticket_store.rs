use std::fmt;

use crate::constants::{ATTRIBUTE_EMBEDDING, CAPABILITY_VECTOR_SEARCH};
use crate::errors::HelpdeskResult;
use crate::models::{HistoricalTicket, NeighborMatch};

/// Optional store-wide feature that may need enabling before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreCapability {
    VectorSearch,
}

impl StoreCapability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VectorSearch => CAPABILITY_VECTOR_SEARCH,
        }
    }
}

impl fmt::Display for StoreCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional per-ticket attribute that may need adding to the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketAttribute {
    Embedding,
}

impl TicketAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Embedding => ATTRIBUTE_EMBEDDING,
        }
    }
}

impl fmt::Display for TicketAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Historical ticket store: readiness probes, idempotent schema repair,
/// nearest-neighbour search, import and embedding write-back.
pub trait ITicketStore: Send + Sync {
    // --- Readiness ---
    fn count(&self) -> HelpdeskResult<usize>;
    fn has_capability(&self, capability: StoreCapability) -> HelpdeskResult<bool>;
    fn has_attribute(&self, attribute: TicketAttribute) -> HelpdeskResult<bool>;
    fn count_with_attribute(&self, attribute: TicketAttribute) -> HelpdeskResult<usize>;
    /// Tickets usable as neighbours: labelled with a group and embedded.
    fn count_usable(&self) -> HelpdeskResult<usize>;

    // --- Repair (create if absent, safe to race) ---
    fn enable_capability(&self, capability: StoreCapability) -> HelpdeskResult<()>;
    fn add_attribute(&self, attribute: TicketAttribute) -> HelpdeskResult<()>;

    // --- Search ---
    /// Labelled tickets whose cosine similarity to `embedding` exceeds
    /// `threshold`, most similar first, at most `limit` of them.
    fn nearest_neighbors(
        &self,
        embedding: &[f32],
        threshold: f64,
        limit: usize,
    ) -> HelpdeskResult<Vec<NeighborMatch>>;

    // --- Import & backfill ---
    fn insert_tickets(&self, tickets: &[HistoricalTicket]) -> HelpdeskResult<usize>;
    fn tickets_missing_embedding(&self, limit: usize) -> HelpdeskResult<Vec<HistoricalTicket>>;
    fn store_embedding(&self, ticket_id: &str, embedding: &[f32]) -> HelpdeskResult<()>;
}
