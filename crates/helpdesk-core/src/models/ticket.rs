use serde::{Deserialize, Serialize};

/// A previously-resolved ticket owned by the historical store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTicket {
    pub id: String,
    pub subject: String,
    pub description: String,
    /// Support group the ticket was routed to, if it was ever labelled.
    pub assigned_group: Option<String>,
    /// Fixed-length embedding, once backfilled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl HistoricalTicket {
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
        assigned_group: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            description: description.into(),
            assigned_group,
            embedding: None,
        }
    }

    /// The text that gets embedded for this ticket.
    pub fn embedding_text(&self) -> String {
        ticket_text(&self.subject, &self.description)
    }
}

/// Join subject and description the way both lookups and backfill embed them.
pub fn ticket_text(subject: &str, description: &str) -> String {
    format!("{} {}", subject.trim(), description.trim())
        .trim()
        .to_string()
}

/// A labelled neighbour returned by the store's nearest-neighbour search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborMatch {
    pub group: String,
    /// Cosine similarity in [-1, 1].
    pub similarity: f64,
}
