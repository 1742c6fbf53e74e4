//! # helpdesk-classification
//!
//! Routes support tickets to a support group using two independent signals.
//!
//! ```text
//! subject + description
//!   ├── PatternClassifier    → ClassificationResult ─┐
//!   └── SimilarityClassifier → SimilarityOutcome    ─┴─► Reconciler → FinalRecommendation
//! ```
//!
//! The two classifiers run concurrently inside [`TicketClassifier`]; the
//! reconciler is pure and runs after the join.

pub mod backfill;
pub mod pattern;
pub mod reconciler;
pub mod service;
pub mod similarity;

pub use backfill::{BackfillReport, EmbeddingBackfill};
pub use pattern::PatternClassifier;
pub use reconciler::{reconcile, Reconciler};
pub use service::TicketClassifier;
pub use similarity::{SimilarityClassifier, StoreReadiness};
