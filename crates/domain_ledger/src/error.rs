//! Ledger domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Candidate entry violates the balance invariant
    #[error("Unbalanced journal entry: debits={debits}, credits={credits}")]
    UnbalancedEntry { debits: Decimal, credits: Decimal },

    /// Candidate entry has no lines
    #[error("Journal entry has no lines")]
    EmptyEntry,

    /// Store failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}
