//! PostgreSQL ledger store adapter
//!
//! Implements the domain's `LedgerStore` port on two tables: an entry
//! header and its lines. An append inserts both inside one transaction,
//! which gives the all-or-nothing semantics the port requires; a failed
//! append leaves no partial entry behind.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use core_kernel::{Currency, EntryId, Money};
use domain_ledger::{
    EntryRef, EntryRefKind, JournalEntry, JournalLine, LedgerStore, NewJournalEntry, StoreError,
};

use crate::error::DatabaseError;

/// Ledger store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgLedgerStore {
    pool: PgPool,
}

impl PgLedgerStore {
    /// Creates a store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_entry(&self, entry: NewJournalEntry) -> Result<EntryId, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = EntryId::new_v7();
        let currency = entry.total_debit.currency();

        sqlx::query(
            r#"
            INSERT INTO journal_entries (
                entry_id, entry_date, memo, total_debit, total_credit,
                currency, reference_kind, reference_id, reference_label, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(*id.as_uuid())
        .bind(entry.date)
        .bind(&entry.memo)
        .bind(entry.total_debit.amount())
        .bind(entry.total_credit.amount())
        .bind(currency.code())
        .bind(entry.reference.kind.to_string())
        .bind(&entry.reference.id)
        .bind(&entry.reference.label)
        .bind(entry.created_at)
        .execute(&mut *tx)
        .await?;

        for (line_no, line) in entry.lines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO journal_lines (
                    line_id, entry_id, line_no, account_id, debit, credit
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(*id.as_uuid())
            .bind(line_no as i32)
            .bind(line.account_id.as_str())
            .bind(line.debit.amount())
            .bind(line.credit.amount())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(entry = %id, "journal entry persisted");
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<JournalEntry>, DatabaseError> {
        let entry_rows = sqlx::query(
            r#"
            SELECT entry_id, entry_date, memo, total_debit, total_credit,
                   currency, reference_kind, reference_id, reference_label, created_at
            FROM journal_entries
            ORDER BY entry_date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let line_rows = sqlx::query(
            r#"
            SELECT entry_id, account_id, debit, credit, currency
            FROM journal_lines
            JOIN journal_entries USING (entry_id)
            ORDER BY entry_id, line_no
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut lines_by_entry: HashMap<Uuid, Vec<JournalLine>> = HashMap::new();
        for row in line_rows {
            let entry_id: Uuid = row.try_get("entry_id")?;
            let currency = parse_currency(&row.try_get::<String, _>("currency")?)?;

            lines_by_entry
                .entry(entry_id)
                .or_default()
                .push(JournalLine {
                    account_id: row.try_get::<String, _>("account_id")?.into(),
                    debit: Money::new(row.try_get("debit")?, currency),
                    credit: Money::new(row.try_get("credit")?, currency),
                });
        }

        let mut entries = Vec::with_capacity(entry_rows.len());
        for row in entry_rows {
            let entry_uuid: Uuid = row.try_get("entry_id")?;
            let currency = parse_currency(&row.try_get::<String, _>("currency")?)?;

            entries.push(JournalEntry {
                id: EntryId::from_uuid(entry_uuid),
                date: row.try_get("entry_date")?,
                memo: row.try_get("memo")?,
                lines: lines_by_entry.remove(&entry_uuid).unwrap_or_default(),
                total_debit: Money::new(row.try_get("total_debit")?, currency),
                total_credit: Money::new(row.try_get("total_credit")?, currency),
                reference: EntryRef {
                    kind: parse_ref_kind(&row.try_get::<String, _>("reference_kind")?)?,
                    id: row.try_get("reference_id")?,
                    label: row.try_get("reference_label")?,
                },
                created_at: row.try_get("created_at")?,
            });
        }

        Ok(entries)
    }
}

fn parse_currency(code: &str) -> Result<Currency, DatabaseError> {
    Currency::from_code(code)
        .ok_or_else(|| DatabaseError::SerializationError(format!("unknown currency: {}", code)))
}

fn parse_ref_kind(tag: &str) -> Result<EntryRefKind, DatabaseError> {
    match tag {
        "manual" => Ok(EntryRefKind::Manual),
        "order" => Ok(EntryRefKind::Order),
        "invoice" => Ok(EntryRefKind::Invoice),
        other => Err(DatabaseError::SerializationError(format!(
            "unknown reference kind: {}",
            other
        ))),
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn append(&self, entry: NewJournalEntry) -> Result<EntryId, StoreError> {
        self.insert_entry(entry)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn read_all(&self) -> Result<Vec<JournalEntry>, StoreError> {
        self.fetch_all()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))
    }
}
