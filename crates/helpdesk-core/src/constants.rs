/// Helpdesk system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of every confidence value, expressed as a percentage.
pub const MAX_CONFIDENCE: u8 = 100;

/// Maximum number of alternative groups a pattern classification may carry.
pub const MAX_ALTERNATIVE_GROUPS: usize = 2;

/// Store capability that enables nearest-neighbour search over embeddings.
pub const CAPABILITY_VECTOR_SEARCH: &str = "vector-search";

/// Ticket attribute holding the embedding vector.
pub const ATTRIBUTE_EMBEDDING: &str = "embedding";

/// Maximum batch size for bulk ticket import.
pub const MAX_BULK_BATCH_SIZE: usize = 1000;
