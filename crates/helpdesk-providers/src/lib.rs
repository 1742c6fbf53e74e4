//! # helpdesk-providers
//!
//! Concrete implementations of the generative-text and embedding
//! collaborators.
//!
//! ## Architecture
//!
//! ```text
//! completion
//! ├── ApiCompletionProvider    (OpenAI-compatible /chat/completions)
//! └── OllamaCompletionProvider (local /api/chat)
//! embeddings
//! ├── ApiEmbeddingProvider     (OpenAI-compatible /embeddings, retry + backoff)
//! ├── OllamaEmbeddingProvider  (local /api/embed)
//! ├── TfIdfFallback            (deterministic, offline)
//! └── CachedEmbeddingProvider  (moka L1 cache keyed by blake3 hash)
//! ```

pub mod completion;
pub mod embeddings;
mod http;

pub use completion::{create_completion_provider, ApiCompletionProvider, OllamaCompletionProvider};
pub use embeddings::{
    create_embedding_provider, ApiEmbeddingProvider, CachedEmbeddingProvider,
    OllamaEmbeddingProvider, TfIdfFallback,
};
