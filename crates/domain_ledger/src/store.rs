//! Ledger store port
//!
//! The accounting core never talks to a database directly; it appends and
//! reads through this port. Adapters: `infra_db::PgLedgerStore` for
//! PostgreSQL, [`MemoryLedgerStore`] for tests and local development.

use async_trait::async_trait;
use std::sync::RwLock;
use thiserror::Error;

use core_kernel::EntryId;

use crate::entry::{JournalEntry, NewJournalEntry};

/// Errors surfaced by a ledger store adapter
#[derive(Debug, Error)]
pub enum StoreError {
    /// Append failed; the entry was not written
    #[error("Ledger store append failed: {0}")]
    Write(String),

    /// Reading the entry snapshot failed
    #[error("Ledger store read failed: {0}")]
    Read(String),
}

/// Append-only persistence for journal entries
///
/// Implementations must provide all-or-nothing appends (a failed append
/// leaves no partial entry) and read-your-writes consistency within a
/// session: a snapshot taken after a successful append includes it.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Appends one entry and returns its store-assigned id
    async fn append(&self, entry: NewJournalEntry) -> Result<EntryId, StoreError>;

    /// Returns the full entry history, newest first
    async fn read_all(&self) -> Result<Vec<JournalEntry>, StoreError>;
}

/// In-memory ledger store
///
/// Backing storage for tests and for running the API without a database.
/// Entries are held in append order; ids are time-ordered UUIDv7.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    entries: RwLock<Vec<JournalEntry>>,
}

impl MemoryLedgerStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if no entries have been stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn append(&self, entry: NewJournalEntry) -> Result<EntryId, StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Write("store lock poisoned".to_string()))?;

        let id = EntryId::new_v7();
        entries.push(JournalEntry::from_parts(id, entry));
        Ok(id)
    }

    async fn read_all(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Read("store lock poisoned".to_string()))?;

        Ok(entries.iter().rev().cloned().collect())
    }
}
