/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("capability not enabled: {capability}")]
    CapabilityMissing { capability: String },

    #[error("attribute not present: {attribute}")]
    AttributeMissing { attribute: String },

    #[error("corrupt embedding for ticket {ticket_id}: {details}")]
    CorruptEmbedding { ticket_id: String, details: String },
}
