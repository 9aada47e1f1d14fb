//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for the mesa accounting core. The crate provides
//! pool management and the [`PgLedgerStore`] adapter behind the domain's
//! `LedgerStore` port; the domain layer never sees SQL.
//!
//! Queries use runtime binding rather than compile-time checked macros so
//! the workspace builds without a database connection. The schema lives in
//! `migrations/` and is applied by the operator.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgLedgerStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/mesa")).await?;
//! let store = PgLedgerStore::new(pool);
//! ```

pub mod error;
pub mod ledger_store;
pub mod pool;

pub use error::DatabaseError;
pub use ledger_store::PgLedgerStore;
pub use pool::{create_pool, create_pool_from_url, ping, DatabaseConfig, DatabasePool};
