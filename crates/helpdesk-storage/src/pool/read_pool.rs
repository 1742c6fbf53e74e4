//! Read-only connections for readiness checks and neighbour scans.
//!
//! Scans are CPU-bound (cosine over every embedded row), so checkout looks
//! for an idle connection first and only blocks when all are busy.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};

use rusqlite::{Connection, OpenFlags};

use helpdesk_core::errors::HelpdeskResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

const MAX_READERS: usize = 8;

pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `size` read-only connections (clamped to `1..=8`). The database
    /// file must already exist.
    pub fn open(path: &Path, size: usize, busy_timeout_ms: u32) -> HelpdeskResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let connections = (0..size.clamp(1, MAX_READERS))
            .map(|_| {
                let conn = Connection::open_with_flags(path, flags)
                    .map_err(|e| to_storage_err(e.to_string()))?;
                apply_read_pragmas(&conn, busy_timeout_ms)?;
                Ok(Mutex::new(conn))
            })
            .collect::<HelpdeskResult<Vec<_>>>()?;
        Ok(Self {
            connections,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> HelpdeskResult<T>
    where
        F: FnOnce(&Connection) -> HelpdeskResult<T>,
    {
        let guard = self.checkout()?;
        f(&guard)
    }

    fn checkout(&self) -> HelpdeskResult<MutexGuard<'_, Connection>> {
        let n = self.connections.len();
        let start = self.cursor.fetch_add(1, Ordering::Relaxed) % n;
        for offset in 0..n {
            match self.connections[(start + offset) % n].try_lock() {
                Ok(guard) => return Ok(guard),
                Err(TryLockError::WouldBlock) => continue,
                Err(TryLockError::Poisoned(e)) => {
                    return Err(to_storage_err(format!("reader lock poisoned: {e}")))
                }
            }
        }
        self.connections[start]
            .lock()
            .map_err(|e| to_storage_err(format!("reader lock poisoned: {e}")))
    }

    pub fn size(&self) -> usize {
        self.connections.len()
    }
}
