//! Journal entry and line types
//!
//! This module defines the structure of ledger entries. An entry is an
//! atomic set of debit/credit lines representing one business event; it is
//! validated against the balance invariant before it ever reaches a store.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AccountId, Currency, EntryId, Money};

/// Maximum tolerated difference between total debits and total credits
pub const BALANCE_TOLERANCE: Decimal = dec!(0.01);

/// A single line in a journal entry
///
/// A line conventionally carries a nonzero value on at most one side, but
/// the model does not forbid both; aggregation always folds the net
/// (`debit - credit`), which makes either representation safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account this line posts to
    pub account_id: AccountId,
    /// Debit amount (zero for a pure credit line)
    pub debit: Money,
    /// Credit amount (zero for a pure debit line)
    pub credit: Money,
}

impl JournalLine {
    /// Creates a pure debit line
    pub fn debit(account_id: impl Into<AccountId>, amount: Money) -> Self {
        Self {
            account_id: account_id.into(),
            credit: Money::zero(amount.currency()),
            debit: amount,
        }
    }

    /// Creates a pure credit line
    pub fn credit(account_id: impl Into<AccountId>, amount: Money) -> Self {
        Self {
            account_id: account_id.into(),
            debit: Money::zero(amount.currency()),
            credit: amount,
        }
    }

    /// Returns the line's currency
    pub fn currency(&self) -> Currency {
        self.debit.currency()
    }

    /// Returns the signed debit-normal contribution of this line
    pub fn net(&self) -> Money {
        self.debit - self.credit
    }
}

/// Tag identifying the business event that produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRefKind {
    /// Entered by hand in the back office
    Manual,
    /// Derived from a completed sales order
    Order,
    /// Derived from an invoice or vendor bill
    Invoice,
}

impl fmt::Display for EntryRefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            EntryRefKind::Manual => "manual",
            EntryRefKind::Order => "order",
            EntryRefKind::Invoice => "invoice",
        };
        write!(f, "{}", tag)
    }
}

/// Reference back to the originating business object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRef {
    /// Kind of originating event
    pub kind: EntryRefKind,
    /// Identifier of the originating object, empty if none
    #[serde(default)]
    pub id: String,
    /// Human-readable reference label
    #[serde(default)]
    pub label: String,
}

impl EntryRef {
    /// Creates a manual reference with no originating object
    pub fn manual() -> Self {
        Self {
            kind: EntryRefKind::Manual,
            id: String::new(),
            label: String::new(),
        }
    }

    /// Creates a reference to a sales order
    pub fn order(id: impl ToString, label: impl Into<String>) -> Self {
        Self {
            kind: EntryRefKind::Order,
            id: id.to_string(),
            label: label.into(),
        }
    }

    /// Creates a reference to an invoice or vendor bill
    pub fn invoice(id: impl ToString, label: impl Into<String>) -> Self {
        Self {
            kind: EntryRefKind::Invoice,
            id: id.to_string(),
            label: label.into(),
        }
    }
}

impl Default for EntryRef {
    fn default() -> Self {
        Self::manual()
    }
}

/// A candidate journal entry, not yet validated or persisted
///
/// Drafts are assembled with the builder methods and handed to
/// [`crate::JournalService::create_journal_entry`], which enforces the
/// balance invariant before writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Accounting date of the transaction (not necessarily creation time)
    pub date: NaiveDate,
    /// Free-text description
    pub memo: String,
    /// Ordered debit/credit lines
    pub lines: Vec<JournalLine>,
    /// Originating business event
    #[serde(default)]
    pub reference: EntryRef,
}

impl EntryDraft {
    /// Creates an empty draft for the given accounting date
    pub fn new(date: NaiveDate, memo: impl Into<String>) -> Self {
        Self {
            date,
            memo: memo.into(),
            lines: Vec::new(),
            reference: EntryRef::manual(),
        }
    }

    /// Adds a debit line
    pub fn debit(mut self, account_id: impl Into<AccountId>, amount: Money) -> Self {
        self.lines.push(JournalLine::debit(account_id, amount));
        self
    }

    /// Adds a credit line
    pub fn credit(mut self, account_id: impl Into<AccountId>, amount: Money) -> Self {
        self.lines.push(JournalLine::credit(account_id, amount));
        self
    }

    /// Adds a custom line
    pub fn line(mut self, line: JournalLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Sets the originating reference
    pub fn with_reference(mut self, reference: EntryRef) -> Self {
        self.reference = reference;
        self
    }

    /// Sum of all debit amounts
    pub fn debit_total(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit.amount()).sum()
    }

    /// Sum of all credit amounts
    pub fn credit_total(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit.amount()).sum()
    }

    /// Checks the balance invariant within [`BALANCE_TOLERANCE`]
    pub fn is_balanced(&self) -> bool {
        (self.debit_total() - self.credit_total()).abs() <= BALANCE_TOLERANCE
    }
}

/// A validated entry ready for the store, which assigns its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJournalEntry {
    /// Accounting date
    pub date: NaiveDate,
    /// Free-text description
    pub memo: String,
    /// Ordered debit/credit lines
    pub lines: Vec<JournalLine>,
    /// Total debits, stored redundantly for display
    pub total_debit: Money,
    /// Total credits, stored redundantly for display
    pub total_credit: Money,
    /// Originating business event
    pub reference: EntryRef,
    /// Wall-clock creation time
    pub created_at: DateTime<Utc>,
}

/// A persisted journal entry
///
/// Immutable once created: the accounting core never updates or deletes
/// entries, it only appends new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Store-assigned identifier
    pub id: EntryId,
    /// Accounting date
    pub date: NaiveDate,
    /// Free-text description
    pub memo: String,
    /// Ordered debit/credit lines
    pub lines: Vec<JournalLine>,
    /// Total debits
    pub total_debit: Money,
    /// Total credits
    pub total_credit: Money,
    /// Originating business event
    pub reference: EntryRef,
    /// Wall-clock creation time
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Assembles a persisted entry from a store-assigned id and its parts
    pub fn from_parts(id: EntryId, entry: NewJournalEntry) -> Self {
        Self {
            id,
            date: entry.date,
            memo: entry.memo,
            lines: entry.lines,
            total_debit: entry.total_debit,
            total_credit: entry.total_credit,
            reference: entry.reference,
            created_at: entry.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
    }

    #[test]
    fn test_draft_builder_totals() {
        let draft = EntryDraft::new(date(), "Till float")
            .debit("cash", Money::new(dec!(200), Currency::EUR))
            .credit("owner_equity", Money::new(dec!(200), Currency::EUR));

        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.debit_total(), dec!(200));
        assert_eq!(draft.credit_total(), dec!(200));
        assert!(draft.is_balanced());
    }

    #[test]
    fn test_draft_unbalanced() {
        let draft = EntryDraft::new(date(), "Broken")
            .debit("cash", Money::new(dec!(100), Currency::EUR))
            .credit("sales", Money::new(dec!(99), Currency::EUR));

        assert!(!draft.is_balanced());
    }

    #[test]
    fn test_draft_balanced_within_tolerance() {
        let draft = EntryDraft::new(date(), "Rounding drift")
            .debit("cash", Money::new(dec!(100.00), Currency::EUR))
            .credit("sales", Money::new(dec!(99.99), Currency::EUR));

        assert!(draft.is_balanced());
    }

    #[test]
    fn test_line_net() {
        let debit = JournalLine::debit("cash", Money::new(dec!(50), Currency::EUR));
        assert_eq!(debit.net().amount(), dec!(50));

        let credit = JournalLine::credit("sales", Money::new(dec!(50), Currency::EUR));
        assert_eq!(credit.net().amount(), dec!(-50));
    }

    #[test]
    fn test_mixed_line_nets_to_difference() {
        let line = JournalLine {
            account_id: "cash".into(),
            debit: Money::new(dec!(30), Currency::EUR),
            credit: Money::new(dec!(10), Currency::EUR),
        };
        assert_eq!(line.net().amount(), dec!(20));
    }

    #[test]
    fn test_reference_defaults() {
        let reference = EntryRef::default();
        assert_eq!(reference.kind, EntryRefKind::Manual);
        assert!(reference.id.is_empty());
        assert!(reference.label.is_empty());
    }

    #[test]
    fn test_reference_kind_tags() {
        assert_eq!(EntryRefKind::Manual.to_string(), "manual");
        assert_eq!(EntryRefKind::Order.to_string(), "order");
        assert_eq!(EntryRefKind::Invoice.to_string(), "invoice");
    }
}
