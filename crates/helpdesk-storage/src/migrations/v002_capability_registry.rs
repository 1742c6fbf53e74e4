//! v002: store_capabilities: registry of enabled optional features.

use rusqlite::Connection;

use helpdesk_core::errors::HelpdeskResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> HelpdeskResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS store_capabilities (
            name        TEXT PRIMARY KEY,
            enabled_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
