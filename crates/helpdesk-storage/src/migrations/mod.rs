//! Versioned schema migrations, applied in order at startup.

mod v001_ticket_tables;
mod v002_capability_registry;

use rusqlite::Connection;
use tracing::info;

use helpdesk_core::errors::{HelpdeskResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> HelpdeskResult<()>;

const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_ticket_tables::migrate),
    (2, v002_capability_registry::migrate),
];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Current schema version recorded in the database (0 if fresh).
pub fn current_version(conn: &Connection) -> HelpdeskResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every pending migration, each in its own transaction.
/// Returns the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> HelpdeskResult<usize> {
    let current = current_version(conn)?;
    let mut applied = 0;

    for (version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        conn.execute_batch("BEGIN IMMEDIATE")
            .map_err(|e| to_storage_err(e.to_string()))?;

        let result = migrate(conn).and_then(|()| {
            conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                [version],
            )
            .map(|_| ())
            .map_err(|e| to_storage_err(e.to_string()))
        });

        if let Err(e) = result {
            let _ = conn.execute_batch("ROLLBACK");
            return Err(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            }
            .into());
        }

        conn.execute_batch("COMMIT")
            .map_err(|e| to_storage_err(e.to_string()))?;
        info!(version, "applied schema migration");
        applied += 1;
    }

    Ok(applied)
}
