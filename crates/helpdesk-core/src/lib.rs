//! # helpdesk-core
//!
//! Foundation crate for the helpdesk triage system.
//! Defines the ticket-classification data model, the collaborator traits
//! (generative text, embeddings, historical ticket store, conversation store),
//! errors, config, constants, and the built-in support-group taxonomy.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod taxonomy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HelpdeskConfig;
pub use errors::{HelpdeskError, HelpdeskResult};
pub use models::{
    ClassificationResult, Confidence, FinalRecommendation, GroupScore, HistoricalTicket,
    RecommendationSource, SimilarityMatch, SimilarityOutcome, TicketClassification,
};
pub use taxonomy::{SupportGroup, Taxonomy};
