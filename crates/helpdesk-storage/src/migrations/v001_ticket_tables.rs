//! v001: historical_tickets base table.
//!
//! The `embedding` column is not created here; it is an optional attribute
//! added by `schema_ops::add_attribute` when first needed.

use rusqlite::Connection;

use helpdesk_core::errors::HelpdeskResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> HelpdeskResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS historical_tickets (
            id              TEXT PRIMARY KEY,
            subject         TEXT NOT NULL,
            description     TEXT NOT NULL,
            assigned_group  TEXT,
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_tickets_group ON historical_tickets(assigned_group);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
