//! # helpdesk-storage
//!
//! SQLite persistence for previously-labelled support tickets.
//!
//! - `pool`: single writer, plus read-only connections for file-backed stores
//! - `migrations`: versioned base schema (tickets, capability registry)
//! - `queries`: ticket CRUD, schema probes/repair, vector search
//! - `engine`: `TicketStore`, the `ITicketStore` implementation
//!
//! The `embedding` column and the `vector-search` capability are deliberately
//! not created by migrations: they are added on demand through
//! `ITicketStore::add_attribute` / `enable_capability`, both idempotent.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::TicketStore;

use helpdesk_core::errors::{HelpdeskError, StorageError};

/// Wrap a SQLite failure message as a workspace error.
pub(crate) fn to_storage_err(message: String) -> HelpdeskError {
    StorageError::SqliteError { message }.into()
}
