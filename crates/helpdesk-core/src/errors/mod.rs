mod provider_error;
mod session_error;
mod storage_error;

pub use provider_error::ProviderError;
pub use session_error::SessionError;
pub use storage_error::StorageError;

/// Convenience alias used by every fallible operation in the workspace.
pub type HelpdeskResult<T> = Result<T, HelpdeskError>;

/// Top-level error for the helpdesk triage system.
///
/// The classification taxonomy (`ClassifierUnavailable`, `MalformedResponse`,
/// `StoreUnavailable`, `InsufficientHistory`) sits alongside wrapped
/// subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum HelpdeskError {
    #[error("classifier unavailable: {reason}")]
    ClassifierUnavailable { reason: String },

    #[error("malformed classifier response: {reason}")]
    MalformedResponse { reason: String },

    #[error("ticket store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("insufficient history: {reason}")]
    InsufficientHistory { reason: String },

    #[error("ticket not found: {id}")]
    TicketNotFound { id: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("provider error: {0}")]
    ProviderError(#[from] ProviderError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("session error: {0}")]
    SessionError(#[from] SessionError),
}
