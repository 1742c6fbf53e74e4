//! Hand-written collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use helpdesk_core::errors::{HelpdeskError, HelpdeskResult, ProviderError};
use helpdesk_core::models::{HistoricalTicket, NeighborMatch};
use helpdesk_core::traits::{
    ICompletionProvider, IEmbeddingProvider, ITicketStore, StoreCapability, TicketAttribute,
};

// ── Completion ────────────────────────────────────────────────────────────

pub struct MockCompletion {
    reply: Result<String, String>,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<(String, String, f32)>>,
}

impl MockCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl ICompletionProvider for MockCompletion {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> HelpdeskResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push((
            system_prompt.to_string(),
            user_prompt.to_string(),
            temperature,
        ));
        self.reply.clone().map_err(|reason| {
            ProviderError::RequestFailed {
                provider: "mock".to_string(),
                reason,
            }
            .into()
        })
    }

    fn name(&self) -> &str {
        "mock-completion"
    }
}

pub fn pattern_reply(primary: &str, confidence: u8) -> String {
    format!(
        r#"{{"primaryGroup":{{"name":"{primary}","confidence":{confidence},"reasoning":"mock reasoning"}},"alternativeGroups":[]}}"#
    )
}

// ── Embeddings ────────────────────────────────────────────────────────────

pub struct FixedEmbedder {
    pub calls: AtomicUsize,
    fail: bool,
}

impl FixedEmbedder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }
}

impl IEmbeddingProvider for FixedEmbedder {
    fn embed(&self, _text: &str) -> HelpdeskResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::ProviderUnavailable {
                provider: "fixed".to_string(),
            }
            .into());
        }
        Ok(vec![1.0, 0.0, 0.0])
    }

    fn embed_batch(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        3
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

// ── Ticket store ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct MockState {
    pub unreachable: bool,
    pub tickets: usize,
    pub capability: bool,
    pub attribute: bool,
    pub embedded: usize,
    /// Embedded tickets without an assigned group.
    pub unlabelled_embedded: usize,
    pub neighbors: Vec<NeighborMatch>,
    /// `enable_capability` reports success without taking effect.
    pub capability_repair_is_noop: bool,
    /// `add_attribute` returns an error.
    pub attribute_repair_fails: bool,
    pub search_fails: bool,
    pub enable_calls: usize,
    pub add_calls: usize,
    pub last_query: Option<(f64, usize)>,
}

pub struct MockStore {
    pub state: Mutex<MockState>,
}

impl MockStore {
    pub fn new(state: MockState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Populated, labelled, embedded, searchable.
    pub fn ready(neighbors: Vec<NeighborMatch>) -> Self {
        Self::new(MockState {
            tickets: 20,
            capability: true,
            attribute: true,
            embedded: 20,
            neighbors,
            ..MockState::default()
        })
    }

    pub fn snapshot(&self) -> MockState {
        self.state.lock().unwrap().clone()
    }
}

fn unreachable_err() -> HelpdeskError {
    HelpdeskError::StoreUnavailable {
        reason: "connection refused".to_string(),
    }
}

impl ITicketStore for MockStore {
    fn count(&self) -> HelpdeskResult<usize> {
        let s = self.state.lock().unwrap();
        if s.unreachable {
            return Err(unreachable_err());
        }
        Ok(s.tickets)
    }

    fn has_capability(&self, _capability: StoreCapability) -> HelpdeskResult<bool> {
        Ok(self.state.lock().unwrap().capability)
    }

    fn has_attribute(&self, _attribute: TicketAttribute) -> HelpdeskResult<bool> {
        Ok(self.state.lock().unwrap().attribute)
    }

    fn count_with_attribute(&self, _attribute: TicketAttribute) -> HelpdeskResult<usize> {
        Ok(self.state.lock().unwrap().embedded)
    }

    fn count_usable(&self) -> HelpdeskResult<usize> {
        let s = self.state.lock().unwrap();
        Ok(s.embedded.saturating_sub(s.unlabelled_embedded))
    }

    fn enable_capability(&self, _capability: StoreCapability) -> HelpdeskResult<()> {
        let mut s = self.state.lock().unwrap();
        s.enable_calls += 1;
        if !s.capability_repair_is_noop {
            s.capability = true;
        }
        Ok(())
    }

    fn add_attribute(&self, attribute: TicketAttribute) -> HelpdeskResult<()> {
        let mut s = self.state.lock().unwrap();
        s.add_calls += 1;
        if s.attribute_repair_fails {
            return Err(HelpdeskError::StorageError(
                helpdesk_core::errors::StorageError::AttributeMissing {
                    attribute: attribute.as_str().to_string(),
                },
            ));
        }
        s.attribute = true;
        Ok(())
    }

    fn nearest_neighbors(
        &self,
        _query: &[f32],
        threshold: f64,
        limit: usize,
    ) -> HelpdeskResult<Vec<NeighborMatch>> {
        let mut s = self.state.lock().unwrap();
        s.last_query = Some((threshold, limit));
        if s.search_fails {
            return Err(unreachable_err());
        }
        Ok(s.neighbors.iter().take(limit).cloned().collect())
    }

    fn insert_tickets(&self, tickets: &[HistoricalTicket]) -> HelpdeskResult<usize> {
        self.state.lock().unwrap().tickets += tickets.len();
        Ok(tickets.len())
    }

    fn tickets_missing_embedding(&self, _limit: usize) -> HelpdeskResult<Vec<HistoricalTicket>> {
        Ok(Vec::new())
    }

    fn store_embedding(&self, _ticket_id: &str, _embedding: &[f32]) -> HelpdeskResult<()> {
        self.state.lock().unwrap().embedded += 1;
        Ok(())
    }
}

pub fn neighbor(group: &str, similarity: f64) -> NeighborMatch {
    NeighborMatch {
        group: group.to_string(),
        similarity,
    }
}
