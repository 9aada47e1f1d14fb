//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_ledger::{CompletedOrder, EntryDraft, JournalLine, PaymentMethod};

/// Strategy for generating ledger currencies
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::EUR),
        Just(Currency::USD),
        Just(Currency::GBP),
        Just(Currency::CHF),
    ]
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating positive EUR Money values
pub fn eur_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|minor| Money::from_minor(minor, Currency::EUR))
}

/// Strategy for generating account codes used in ledger tests
pub fn account_code_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("cash"),
        Just("bank"),
        Just("sales"),
        Just("vat_output"),
        Just("receivable"),
        Just("payable"),
        Just("food_cost"),
    ]
}

/// Strategy for generating accounting dates within a year
pub fn accounting_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u32..365u32).prop_map(|days| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(days as i64)
    })
}

/// Strategy for generating payment methods
pub fn payment_method_strategy() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Card),
        Just(PaymentMethod::Iban),
    ]
}

/// Strategy for generating balanced entry drafts
///
/// Each generated draft pairs every debit with a mirroring credit, so the
/// balance invariant holds by construction.
pub fn balanced_draft_strategy() -> impl Strategy<Value = EntryDraft> {
    (
        accounting_date_strategy(),
        proptest::collection::vec(
            (
                account_code_strategy(),
                account_code_strategy(),
                positive_amount_minor_strategy(),
            ),
            1..5,
        ),
    )
        .prop_map(|(date, pairs)| {
            let mut draft = EntryDraft::new(date, "generated");
            for (debit_account, credit_account, minor) in pairs {
                let amount = Money::from_minor(minor, Currency::EUR);
                draft = draft
                    .line(JournalLine::debit(debit_account, amount))
                    .line(JournalLine::credit(credit_account, amount));
            }
            draft
        })
}

/// Strategy for generating completed orders with tax at most the total
pub fn completed_order_strategy() -> impl Strategy<Value = CompletedOrder> {
    (
        1i64..1_000_000i64,
        0u32..10_000u32,
        payment_method_strategy(),
        1u32..30u32,
    )
        .prop_map(|(gross_minor, tax_permille, method, table)| {
            let gross = Decimal::new(gross_minor, 2);
            // Tax is a fraction of the gross, never exceeding it
            let tax = (gross * Decimal::new(tax_permille as i64, 4)).round_dp(2);
            CompletedOrder {
                id: Default::default(),
                table: table.to_string(),
                total: None,
                total_with_tax: Some(gross),
                tax_amount: Some(tax),
                payment_method: method,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ledger::{sales_entry_draft, AccountRoleMap};

    proptest! {
        #[test]
        fn balanced_drafts_always_balance(draft in balanced_draft_strategy()) {
            prop_assert!(draft.is_balanced());
        }

        #[test]
        fn generated_orders_have_tax_at_most_gross(order in completed_order_strategy()) {
            prop_assert!(order.tax() <= order.gross());
        }

        #[test]
        fn sales_drafts_from_generated_orders_balance_to_gross(
            order in completed_order_strategy(),
            date in accounting_date_strategy()
        ) {
            let draft = sales_entry_draft(&order, &AccountRoleMap::new(), Currency::EUR, date);

            prop_assert_eq!(draft.debit_total(), order.gross());
            prop_assert_eq!(draft.credit_total(), order.gross());
        }

        #[test]
        fn eur_money_is_positive(money in eur_money_strategy()) {
            prop_assert!(money.is_positive());
        }
    }
}
