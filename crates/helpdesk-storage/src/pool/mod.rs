//! Connections for the ticket store.
//!
//! A file-backed store gets one writer and a small set of read-only
//! connections for readiness checks and neighbour scans. An in-memory store
//! is a single private database, so it has no readers and every read goes to
//! the writer.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use helpdesk_core::config::StorageConfig;
use helpdesk_core::errors::HelpdeskResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    writer: WriteConnection,
    readers: Option<ReadPool>,
    db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer, then the readers, against a database file.
    pub fn open(path: &Path, config: &StorageConfig) -> HelpdeskResult<Self> {
        // The writer creates the file and switches it to WAL before any
        // read-only connection attaches.
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        let readers = ReadPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> HelpdeskResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
            db_path: None,
        })
    }

    /// Run a read-only closure on a reader, or on the writer when there are
    /// no readers.
    pub fn read<F, T>(&self, f: F) -> HelpdeskResult<T>
    where
        F: FnOnce(&Connection) -> HelpdeskResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn(f),
        }
    }

    /// Run a single write (schema repair, embedding write-back).
    pub fn write<F, T>(&self, f: F) -> HelpdeskResult<T>
    where
        F: FnOnce(&Connection) -> HelpdeskResult<T>,
    {
        self.writer.with_conn(f)
    }

    /// Run several writes atomically (ticket import).
    pub fn write_batch<F, T>(&self, f: F) -> HelpdeskResult<T>
    where
        F: FnOnce(&Connection) -> HelpdeskResult<T>,
    {
        self.writer.transaction(f)
    }

    pub fn writer(&self) -> &WriteConnection {
        &self.writer
    }

    /// Number of read-only connections; zero for in-memory stores.
    pub fn reader_count(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }
}
