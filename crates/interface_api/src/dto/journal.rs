//! Journal DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::Money;
use domain_ledger::{EntryDraft, EntryRef, EntryRefKind, JournalEntry};

/// Request to create a manual journal entry
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJournalEntryRequest {
    /// Accounting date
    pub date: NaiveDate,
    /// Free-text description
    #[serde(default)]
    pub memo: String,
    /// Debit/credit lines
    #[validate(length(min = 1, message = "at least one line is required"))]
    pub lines: Vec<JournalLineRequest>,
    /// Originating reference, manual when absent
    #[serde(default)]
    pub reference: Option<EntryRefRequest>,
}

/// One line of a journal entry request
#[derive(Debug, Serialize, Deserialize)]
pub struct JournalLineRequest {
    /// Account code
    pub account_id: String,
    /// Debit amount, zero when absent
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount, zero when absent
    #[serde(default)]
    pub credit: Decimal,
}

/// Reference payload
#[derive(Debug, Deserialize)]
pub struct EntryRefRequest {
    pub kind: EntryRefKind,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl CreateJournalEntryRequest {
    /// Converts the request into a domain draft
    pub fn into_draft(self, currency: core_kernel::Currency) -> EntryDraft {
        let mut draft = EntryDraft::new(self.date, self.memo);

        for line in self.lines {
            draft = draft.line(domain_ledger::JournalLine {
                account_id: line.account_id.into(),
                debit: Money::new(line.debit, currency),
                credit: Money::new(line.credit, currency),
            });
        }

        if let Some(reference) = self.reference {
            draft = draft.with_reference(EntryRef {
                kind: reference.kind,
                id: reference.id,
                label: reference.label,
            });
        }

        draft
    }
}

/// A stored journal entry as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct JournalEntryResponse {
    pub id: String,
    pub date: NaiveDate,
    pub memo: String,
    pub lines: Vec<JournalLineResponse>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub currency: String,
    pub reference_kind: EntryRefKind,
    pub reference_id: String,
    pub reference_label: String,
    pub created_at: DateTime<Utc>,
}

/// One stored line
#[derive(Debug, Serialize, Deserialize)]
pub struct JournalLineResponse {
    pub account_id: String,
    pub debit: Decimal,
    pub credit: Decimal,
}

impl From<JournalEntry> for JournalEntryResponse {
    fn from(entry: JournalEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            date: entry.date,
            memo: entry.memo,
            lines: entry
                .lines
                .iter()
                .map(|line| JournalLineResponse {
                    account_id: line.account_id.to_string(),
                    debit: line.debit.amount(),
                    credit: line.credit.amount(),
                })
                .collect(),
            total_debit: entry.total_debit.amount(),
            total_credit: entry.total_credit.amount(),
            currency: entry.total_debit.currency().code().to_string(),
            reference_kind: entry.reference.kind,
            reference_id: entry.reference.id,
            reference_label: entry.reference.label,
            created_at: entry.created_at,
        }
    }
}
