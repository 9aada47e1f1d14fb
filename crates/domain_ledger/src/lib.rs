//! Ledger Domain - Double-Entry Journal for the Restaurant Back Office
//!
//! This crate implements the accounting core of the mesa point-of-sale
//! system: journal entries are validated (debits = credits) and appended to
//! an immutable ledger; balances and financial statements are derived from
//! the full entry history on demand.
//!
//! # Design
//!
//! - The ledger is append-only. Entries are never edited or deleted, so
//!   balances can always be recomputed from history and never drift.
//! - Persistence is behind the [`LedgerStore`] port; adapters exist for
//!   PostgreSQL (infra_db) and in-memory use (tests, local development).
//! - Statement builders are pure functions over an entry snapshot plus an
//!   [`AccountRoleMap`] naming which accounts play the cash/bank/sales/VAT
//!   roles.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{EntryDraft, JournalService, MemoryLedgerStore};
//!
//! let service = JournalService::new(Arc::new(MemoryLedgerStore::new()), Currency::EUR);
//!
//! let draft = EntryDraft::new(date, "Till float")
//!     .debit("cash", amount)
//!     .credit("owner_equity", amount);
//!
//! let entry = service.create_journal_entry(draft).await?;
//! ```

pub mod account;
pub mod balances;
pub mod entry;
pub mod error;
pub mod invoice;
pub mod journal;
pub mod roles;
pub mod sales;
pub mod statements;
pub mod store;

pub use account::{Account, AccountType, RestaurantChartOfAccounts};
pub use balances::account_balances;
pub use entry::{EntryDraft, EntryRef, EntryRefKind, JournalEntry, JournalLine, NewJournalEntry};
pub use error::LedgerError;
pub use invoice::{Invoice, InvoiceItem, InvoiceKind, InvoicePostings, InvoiceStatus};
pub use journal::JournalService;
pub use roles::{AccountRole, AccountRoleMap};
pub use sales::{sales_entry_draft, CompletedOrder, PaymentMethod};
pub use statements::{build_balance_sheet, cash_flow, BalanceSheet, CashFlow, StatementLine};
pub use store::{LedgerStore, MemoryLedgerStore, StoreError};
