pub mod defaults;

mod completion_config;
mod embedding_config;
mod observability_config;
mod reconciliation_config;
mod session_config;
mod similarity_config;
mod storage_config;

pub use completion_config::CompletionConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use reconciliation_config::ReconciliationConfig;
pub use session_config::SessionConfig;
pub use similarity_config::SimilarityConfig;
pub use storage_config::StorageConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{HelpdeskError, HelpdeskResult};
use crate::taxonomy::Taxonomy;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpdeskConfig {
    /// Optional TOML file with `[[groups]]`; the built-in taxonomy otherwise.
    pub taxonomy_path: Option<String>,
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub completion: CompletionConfig,
    pub similarity: SimilarityConfig,
    pub reconciliation: ReconciliationConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl HelpdeskConfig {
    /// Parse config from a TOML string.
    pub fn from_toml(toml_str: &str) -> HelpdeskResult<Self> {
        toml::from_str(toml_str).map_err(|e| HelpdeskError::ConfigError(e.to_string()))
    }

    /// Load config from a TOML file.
    pub fn from_file(path: &Path) -> HelpdeskResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HelpdeskError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Resolve the taxonomy this config points at.
    pub fn load_taxonomy(&self) -> HelpdeskResult<Taxonomy> {
        match self.taxonomy_path {
            Some(ref path) => Taxonomy::from_file(Path::new(path)),
            None => Ok(Taxonomy::builtin()),
        }
    }
}
