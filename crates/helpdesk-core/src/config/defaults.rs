// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "helpdesk.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "api";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 50;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434";

// --- Completion ---
pub const DEFAULT_COMPLETION_PROVIDER: &str = "api";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_COMPLETION_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 60;

// --- Similarity ---
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_SIMILARITY_TOP_K: usize = 5;

// --- Reconciliation ---
pub const DEFAULT_AGREEMENT_PATTERN_WEIGHT: f64 = 0.4;
pub const DEFAULT_AGREEMENT_HISTORY_WEIGHT: f64 = 0.6;
pub const DEFAULT_PARTIAL_PATTERN_WEIGHT: f64 = 0.7;
pub const DEFAULT_PARTIAL_HISTORY_WEIGHT: f64 = 0.3;
pub const DEFAULT_HISTORY_OVERRIDE_THRESHOLD: u8 = 70;
pub const DEFAULT_DISAGREEMENT_CAP: u8 = 70;

// --- Session ---
pub const DEFAULT_MAX_TURNS: usize = 10;
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 3_600; // 1 hour

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
