//! Journal service
//!
//! The only component with a side effect: validating candidate entries and
//! appending them through the [`LedgerStore`] port. Everything else in the
//! crate is a pure transform; the service also offers snapshot-based
//! conveniences that read the store once and hand the result to them.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use core_kernel::{AccountId, Currency, Money};

use crate::balances::account_balances;
use crate::entry::{EntryDraft, JournalEntry, NewJournalEntry, BALANCE_TOLERANCE};
use crate::error::LedgerError;
use crate::roles::AccountRoleMap;
use crate::sales::{sales_entry_draft, CompletedOrder};
use crate::statements::{build_balance_sheet, cash_flow, BalanceSheet, CashFlow};
use crate::store::LedgerStore;

/// Validates and posts journal entries against an injected store
#[derive(Clone)]
pub struct JournalService {
    store: Arc<dyn LedgerStore>,
    currency: Currency,
}

impl JournalService {
    /// Creates a service over the given store
    pub fn new(store: Arc<dyn LedgerStore>, currency: Currency) -> Self {
        Self { store, currency }
    }

    /// The ledger currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Validates a candidate entry and appends it to the ledger
    ///
    /// Fails with [`LedgerError::UnbalancedEntry`] before any write when
    /// total debits and credits differ by more than the tolerance. Store
    /// failures propagate unchanged; the entry either fully exists in the
    /// store afterwards or not at all. Calling twice with identical input
    /// produces two distinct entries: each call is its own economic event.
    pub async fn create_journal_entry(
        &self,
        draft: EntryDraft,
    ) -> Result<JournalEntry, LedgerError> {
        if draft.lines.is_empty() {
            return Err(LedgerError::EmptyEntry);
        }

        let debits = draft.debit_total();
        let credits = draft.credit_total();
        if (debits - credits).abs() > BALANCE_TOLERANCE {
            return Err(LedgerError::UnbalancedEntry { debits, credits });
        }

        let entry = NewJournalEntry {
            date: draft.date,
            memo: draft.memo,
            lines: draft.lines,
            total_debit: Money::new(debits, self.currency),
            total_credit: Money::new(credits, self.currency),
            reference: draft.reference,
            created_at: Utc::now(),
        };

        let id = self.store.append(entry.clone()).await?;
        tracing::info!(entry = %id, debits = %debits, credits = %credits, "journal entry posted");

        Ok(JournalEntry::from_parts(id, entry))
    }

    /// Posts the sales entry for a completed order
    ///
    /// Runs once per order transition into the completed state; the order
    /// workflow is responsible for not calling it twice for the same
    /// order. The derived lines balance by construction, so this only
    /// fails on store errors or corrupted order amounts.
    pub async fn post_sales_entry_for_order(
        &self,
        order: &CompletedOrder,
        roles: &AccountRoleMap,
    ) -> Result<JournalEntry, LedgerError> {
        let draft = sales_entry_draft(order, roles, self.currency, Utc::now().date_naive());
        self.create_journal_entry(draft).await
    }

    /// Returns the full entry history, newest first
    pub async fn entries(&self) -> Result<Vec<JournalEntry>, LedgerError> {
        Ok(self.store.read_all().await?)
    }

    /// Aggregates current balances from a fresh snapshot
    pub async fn balances(&self) -> Result<HashMap<AccountId, Money>, LedgerError> {
        let entries = self.store.read_all().await?;
        Ok(account_balances(&entries))
    }

    /// Builds the balance sheet from a fresh snapshot
    pub async fn balance_sheet(&self, roles: &AccountRoleMap) -> Result<BalanceSheet, LedgerError> {
        let entries = self.store.read_all().await?;
        let balances = account_balances(&entries);
        Ok(build_balance_sheet(&balances, roles, self.currency))
    }

    /// Builds the cash flow statement from a fresh snapshot
    pub async fn cash_flow(&self, roles: &AccountRoleMap) -> Result<CashFlow, LedgerError> {
        let entries = self.store.read_all().await?;
        Ok(cash_flow(&entries, roles, self.currency))
    }
}
