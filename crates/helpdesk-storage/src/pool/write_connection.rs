//! The store's only writable connection.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, TransactionBehavior};

use helpdesk_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use helpdesk_core::errors::HelpdeskResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> HelpdeskResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> HelpdeskResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> HelpdeskResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| to_storage_err(format!("writer lock poisoned: {e}")))
    }

    pub fn with_conn<F, T>(&self, f: F) -> HelpdeskResult<T>
    where
        F: FnOnce(&Connection) -> HelpdeskResult<T>,
    {
        let guard = self.lock()?;
        f(&guard)
    }

    /// Run `f` inside an IMMEDIATE transaction. An error from `f` rolls the
    /// whole batch back.
    pub fn transaction<F, T>(&self, f: F) -> HelpdeskResult<T>
    where
        F: FnOnce(&Connection) -> HelpdeskResult<T>,
    {
        let mut guard = self.lock()?;
        let tx = guard
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| to_storage_err(e.to_string()))?;
        let out = f(&tx)?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(out)
    }
}
