//! Probes and idempotent repair for optional store features.
//!
//! Both repairs are "create if absent": running them twice, or from two
//! connections at once, leaves the schema in the same state.

use rusqlite::{params, Connection};
use tracing::info;

use helpdesk_core::errors::{HelpdeskResult, StorageError};
use helpdesk_core::traits::{StoreCapability, TicketAttribute};

use crate::to_storage_err;

/// Whether a capability has been enabled.
pub fn has_capability(conn: &Connection, capability: StoreCapability) -> HelpdeskResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM store_capabilities WHERE name = ?1)",
        params![capability.as_str()],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Enable a capability. No-op if already enabled.
pub fn enable_capability(conn: &Connection, capability: StoreCapability) -> HelpdeskResult<()> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO store_capabilities (name) VALUES (?1)",
            params![capability.as_str()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if inserted > 0 {
        info!(capability = %capability, "store capability enabled");
    }
    Ok(())
}

/// Whether the tickets table has the column backing an attribute.
pub fn has_attribute(conn: &Connection, attribute: TicketAttribute) -> HelpdeskResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM pragma_table_info('historical_tickets') WHERE name = ?1)",
        params![column_name(attribute)],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Add the column backing an attribute. No-op if it already exists,
/// including when another connection added it first.
pub fn add_attribute(conn: &Connection, attribute: TicketAttribute) -> HelpdeskResult<()> {
    if has_attribute(conn, attribute)? {
        return Ok(());
    }
    let sql = format!(
        "ALTER TABLE historical_tickets ADD COLUMN {} {}",
        column_name(attribute),
        column_type(attribute)
    );
    match conn.execute_batch(&sql) {
        Ok(()) => {
            info!(attribute = %attribute, "ticket attribute added");
            Ok(())
        }
        Err(e) if e.to_string().contains("duplicate column name") => Ok(()),
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// Fail with `AttributeMissing` unless the attribute exists.
pub fn require_attribute(conn: &Connection, attribute: TicketAttribute) -> HelpdeskResult<()> {
    if has_attribute(conn, attribute)? {
        Ok(())
    } else {
        Err(StorageError::AttributeMissing {
            attribute: attribute.to_string(),
        }
        .into())
    }
}

/// Fail with `CapabilityMissing` unless the capability is enabled.
pub fn require_capability(conn: &Connection, capability: StoreCapability) -> HelpdeskResult<()> {
    if has_capability(conn, capability)? {
        Ok(())
    } else {
        Err(StorageError::CapabilityMissing {
            capability: capability.to_string(),
        }
        .into())
    }
}

fn column_name(attribute: TicketAttribute) -> &'static str {
    match attribute {
        TicketAttribute::Embedding => "embedding",
    }
}

fn column_type(attribute: TicketAttribute) -> &'static str {
    match attribute {
        TicketAttribute::Embedding => "BLOB",
    }
}
