pub mod classification;
pub mod confidence;
pub mod conversation;
pub mod recommendation;
pub mod similarity;
pub mod ticket;

pub use classification::{ClassificationResult, GroupScore};
pub use confidence::Confidence;
pub use conversation::{ChatRole, ChatTurn};
pub use recommendation::{FinalRecommendation, RecommendationSource, TicketClassification};
pub use similarity::{SimilarityMatch, SimilarityOutcome};
pub use ticket::{ticket_text, HistoricalTicket, NeighborMatch};
