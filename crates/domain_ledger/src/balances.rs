//! Balance aggregation
//!
//! Balances are never stored; they are folded from the full entry history
//! on every read. The fold is commutative, so entry order is irrelevant
//! and concurrent appends need no coordination.

use std::collections::HashMap;

use core_kernel::{AccountId, Money};

use crate::entry::JournalEntry;

/// Folds entries into signed debit-normal balances per account
///
/// Each line contributes its net (`debit - credit`) to its account. Lines
/// with an empty account id are skipped. Accounts never referenced are
/// absent from the map; callers default to zero on lookup miss.
pub fn account_balances(entries: &[JournalEntry]) -> HashMap<AccountId, Money> {
    let mut balances = HashMap::new();

    for entry in entries {
        for line in &entry.lines {
            if line.account_id.is_empty() {
                continue;
            }

            let balance = balances
                .entry(line.account_id.clone())
                .or_insert_with(|| Money::zero(line.currency()));
            *balance = *balance + line.net();
        }
    }

    balances
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use core_kernel::{Currency, EntryId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::entry::{EntryRef, JournalLine, NewJournalEntry};

    fn entry(lines: Vec<JournalLine>) -> JournalEntry {
        let debits: Decimal = lines.iter().map(|l| l.debit.amount()).sum();
        let credits: Decimal = lines.iter().map(|l| l.credit.amount()).sum();
        JournalEntry::from_parts(
            EntryId::new_v7(),
            NewJournalEntry {
                date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
                memo: "test".to_string(),
                lines,
                total_debit: Money::new(debits, Currency::EUR),
                total_credit: Money::new(credits, Currency::EUR),
                reference: EntryRef::manual(),
                created_at: Utc::now(),
            },
        )
    }

    fn eur(amount: Decimal) -> Money {
        Money::new(amount, Currency::EUR)
    }

    #[test]
    fn test_balances_fold_nets_per_account() {
        let entries = vec![
            entry(vec![
                JournalLine::debit("cash", eur(dec!(116))),
                JournalLine::credit("sales", eur(dec!(100))),
                JournalLine::credit("vat_output", eur(dec!(16))),
            ]),
            entry(vec![
                JournalLine::debit("cash", eur(dec!(50))),
                JournalLine::credit("sales", eur(dec!(50))),
            ]),
        ];

        let balances = account_balances(&entries);

        assert_eq!(balances[&AccountId::from("cash")].amount(), dec!(166));
        assert_eq!(balances[&AccountId::from("sales")].amount(), dec!(-150));
        assert_eq!(balances[&AccountId::from("vat_output")].amount(), dec!(-16));
    }

    #[test]
    fn test_empty_account_ids_are_skipped() {
        let entries = vec![entry(vec![
            JournalLine::debit("cash", eur(dec!(10))),
            JournalLine::credit("", eur(dec!(10))),
        ])];

        let balances = account_balances(&entries);

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[&AccountId::from("cash")].amount(), dec!(10));
    }

    #[test]
    fn test_unreferenced_accounts_are_absent() {
        let balances = account_balances(&[]);
        assert!(balances.get(&AccountId::from("cash")).is_none());
    }

    #[test]
    fn test_fold_is_permutation_invariant() {
        let a = entry(vec![
            JournalLine::debit("cash", eur(dec!(30))),
            JournalLine::credit("sales", eur(dec!(30))),
        ]);
        let b = entry(vec![
            JournalLine::debit("bank", eur(dec!(70))),
            JournalLine::credit("sales", eur(dec!(70))),
        ]);

        let forward = account_balances(&[a.clone(), b.clone()]);
        let reverse = account_balances(&[b, a]);

        assert_eq!(forward, reverse);
    }
}
