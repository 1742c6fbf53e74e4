//! TicketStore: owns the ConnectionPool, runs migrations at startup and
//! implements `ITicketStore`.

use std::path::Path;

use helpdesk_core::config::StorageConfig;
use helpdesk_core::constants::MAX_BULK_BATCH_SIZE;
use helpdesk_core::errors::HelpdeskResult;
use helpdesk_core::models::{HistoricalTicket, NeighborMatch};
use helpdesk_core::traits::{ITicketStore, StoreCapability, TicketAttribute};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{schema_ops, ticket_crud, vector_search};

/// SQLite-backed historical ticket store.
pub struct TicketStore {
    pool: ConnectionPool,
}

impl TicketStore {
    /// Open a store backed by a file on disk with default settings.
    pub fn open(path: &Path) -> HelpdeskResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed store using the given storage settings.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> HelpdeskResult<Self> {
        Self::initialize(ConnectionPool::open(path, config)?)
    }

    /// Open the store at `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> HelpdeskResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> HelpdeskResult<Self> {
        Self::initialize(ConnectionPool::open_in_memory()?)
    }

    fn initialize(pool: ConnectionPool) -> HelpdeskResult<Self> {
        pool.write(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Fetch a single ticket by id.
    pub fn get_ticket(&self, id: &str) -> HelpdeskResult<Option<HistoricalTicket>> {
        self.pool.read(|conn| ticket_crud::get_ticket(conn, id))
    }
}

impl ITicketStore for TicketStore {
    fn count(&self) -> HelpdeskResult<usize> {
        self.pool.read(ticket_crud::count_tickets)
    }

    fn has_capability(&self, capability: StoreCapability) -> HelpdeskResult<bool> {
        self.pool.read(|conn| schema_ops::has_capability(conn, capability))
    }

    fn has_attribute(&self, attribute: TicketAttribute) -> HelpdeskResult<bool> {
        self.pool.read(|conn| schema_ops::has_attribute(conn, attribute))
    }

    fn count_with_attribute(&self, attribute: TicketAttribute) -> HelpdeskResult<usize> {
        self.pool.read(|conn| ticket_crud::count_with_attribute(conn, attribute))
    }

    fn count_usable(&self) -> HelpdeskResult<usize> {
        self.pool.read(ticket_crud::count_usable)
    }

    fn enable_capability(&self, capability: StoreCapability) -> HelpdeskResult<()> {
        self.pool.write(|conn| schema_ops::enable_capability(conn, capability))
    }

    fn add_attribute(&self, attribute: TicketAttribute) -> HelpdeskResult<()> {
        self.pool.write(|conn| schema_ops::add_attribute(conn, attribute))
    }

    fn nearest_neighbors(
        &self,
        embedding: &[f32],
        threshold: f64,
        limit: usize,
    ) -> HelpdeskResult<Vec<NeighborMatch>> {
        self.pool.read(|conn| {
            vector_search::nearest_neighbors(conn, embedding, threshold, limit)
        })
    }

    fn insert_tickets(&self, tickets: &[HistoricalTicket]) -> HelpdeskResult<usize> {
        if tickets.iter().any(|t| t.embedding.is_some()) {
            self.pool
                .write(|conn| schema_ops::add_attribute(conn, TicketAttribute::Embedding))?;
        }
        // One transaction per chunk keeps the write lock hold time bounded.
        let mut inserted = 0;
        for chunk in tickets.chunks(MAX_BULK_BATCH_SIZE) {
            inserted += self
                .pool
                .write_batch(|conn| ticket_crud::upsert_tickets(conn, chunk))?;
        }
        Ok(inserted)
    }

    fn tickets_missing_embedding(&self, limit: usize) -> HelpdeskResult<Vec<HistoricalTicket>> {
        self.pool.read(|conn| ticket_crud::missing_embedding(conn, limit))
    }

    fn store_embedding(&self, ticket_id: &str, embedding: &[f32]) -> HelpdeskResult<()> {
        self.pool.write(|conn| vector_search::store_embedding(conn, ticket_id, embedding))
    }
}
