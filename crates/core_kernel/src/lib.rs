//! Core Kernel - Foundational types for the mesa restaurant accounting system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and VAT helpers
//! - Strongly-typed identifiers for ledger entities
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{AccountId, EntryId, InvoiceId, OrderId};
pub use money::{Currency, Money, MoneyError, TaxRate};
