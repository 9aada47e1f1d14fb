//! Comprehensive tests for domain_ledger

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{AccountId, Currency, Money, OrderId};

use domain_ledger::{
    account_balances, build_balance_sheet, cash_flow, sales_entry_draft, AccountRole,
    AccountRoleMap, CompletedOrder, EntryDraft, JournalService, LedgerError, MemoryLedgerStore,
    PaymentMethod,
};

fn eur(amount: Decimal) -> Money {
    Money::new(amount, Currency::EUR)
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
}

fn service() -> (Arc<MemoryLedgerStore>, JournalService) {
    let store = Arc::new(MemoryLedgerStore::new());
    let service = JournalService::new(store.clone(), Currency::EUR);
    (store, service)
}

fn order(
    method: PaymentMethod,
    total_with_tax: Decimal,
    tax_amount: Decimal,
) -> CompletedOrder {
    CompletedOrder {
        id: OrderId::new(),
        table: "12".to_string(),
        total: None,
        total_with_tax: Some(total_with_tax),
        tax_amount: Some(tax_amount),
        payment_method: method,
    }
}

// ============================================================================
// Validator & Writer
// ============================================================================

mod validator_tests {
    use super::*;

    #[tokio::test]
    async fn balanced_entry_stores_computed_totals() {
        let (_, service) = service();

        let draft = EntryDraft::new(date(), "Supplier paid from till")
            .debit("payable", eur(dec!(75.50)))
            .credit("cash", eur(dec!(75.50)));

        let entry = service.create_journal_entry(draft).await.unwrap();

        assert_eq!(entry.total_debit.amount(), dec!(75.50));
        assert_eq!(entry.total_credit.amount(), dec!(75.50));
        assert_eq!(entry.reference.kind, domain_ledger::EntryRefKind::Manual);
    }

    #[tokio::test]
    async fn unbalanced_entry_leaves_store_untouched() {
        let (store, service) = service();

        let draft = EntryDraft::new(date(), "Typo in amount")
            .debit("cash", eur(dec!(100)))
            .credit("sales", eur(dec!(99)));

        let result = service.create_journal_entry(draft).await;

        match result {
            Err(LedgerError::UnbalancedEntry { debits, credits }) => {
                assert_eq!(debits, dec!(100));
                assert_eq!(credits, dec!(99));
            }
            other => panic!("expected unbalanced error, got {:?}", other.map(|e| e.id)),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn multi_line_entries_balance_across_lines() {
        let (_, service) = service();

        // Split settlement: part cash, part card
        let draft = EntryDraft::new(date(), "Split bill table 3")
            .debit("cash", eur(dec!(30)))
            .debit("bank", eur(dec!(86)))
            .credit("sales", eur(dec!(100)))
            .credit("vat_output", eur(dec!(16)));

        assert!(service.create_journal_entry(draft).await.is_ok());
    }
}

// ============================================================================
// Sales posting rule
// ============================================================================

mod sales_posting_tests {
    use super::*;

    #[tokio::test]
    async fn cash_order_posts_three_balanced_lines() {
        // Spec scenario: total 116, tax 16 -> sales amount 100
        let (_, service) = service();
        let roles = AccountRoleMap::new();

        let entry = service
            .post_sales_entry_for_order(&order(PaymentMethod::Cash, dec!(116), dec!(16)), &roles)
            .await
            .unwrap();

        assert_eq!(entry.lines.len(), 3);
        assert_eq!(entry.lines[0].account_id.as_str(), "cash");
        assert_eq!(entry.lines[0].debit.amount(), dec!(116));
        assert_eq!(entry.lines[1].account_id.as_str(), "sales");
        assert_eq!(entry.lines[1].credit.amount(), dec!(100));
        assert_eq!(entry.lines[2].account_id.as_str(), "vat_output");
        assert_eq!(entry.lines[2].credit.amount(), dec!(16));

        let balances = service.balances().await.unwrap();
        assert_eq!(balances[&AccountId::from("cash")].amount(), dec!(116));
        assert_eq!(balances[&AccountId::from("sales")].amount(), dec!(-100));
        assert_eq!(balances[&AccountId::from("vat_output")].amount(), dec!(-16));
    }

    #[tokio::test]
    async fn card_order_without_tax_posts_two_lines() {
        let (_, service) = service();
        let roles = AccountRoleMap::new();

        let entry = service
            .post_sales_entry_for_order(&order(PaymentMethod::Card, dec!(50), dec!(0)), &roles)
            .await
            .unwrap();

        assert_eq!(entry.lines.len(), 2);
        assert_eq!(entry.lines[0].account_id.as_str(), "bank");
        assert_eq!(entry.lines[0].debit.amount(), dec!(50));
        assert_eq!(entry.lines[1].account_id.as_str(), "sales");
        assert_eq!(entry.lines[1].credit.amount(), dec!(50));
    }

    #[tokio::test]
    async fn posting_uses_configured_role_accounts() {
        let (_, service) = service();
        let roles = AccountRoleMap::new()
            .with_cash("1000")
            .with_sales("4000")
            .with_vat_output("2100");

        let entry = service
            .post_sales_entry_for_order(&order(PaymentMethod::Cash, dec!(23.20), dec!(3.20)), &roles)
            .await
            .unwrap();

        assert_eq!(entry.lines[0].account_id.as_str(), "1000");
        assert_eq!(entry.lines[1].account_id.as_str(), "4000");
        assert_eq!(entry.lines[2].account_id.as_str(), "2100");
    }

    #[test]
    fn sales_lines_always_balance_to_the_gross() {
        // Property: for any 0 <= tax <= total the draft balances to total
        let roles = AccountRoleMap::new();
        for (total, tax) in [
            (dec!(116), dec!(16)),
            (dec!(50), dec!(0)),
            (dec!(9.99), dec!(1.52)),
            (dec!(0), dec!(0)),
        ] {
            let o = order(PaymentMethod::Cash, total, tax);
            let draft = sales_entry_draft(&o, &roles, Currency::EUR, date());

            assert_eq!(draft.debit_total(), total);
            assert_eq!(draft.credit_total(), total);
        }
    }
}

// ============================================================================
// Balance aggregation
// ============================================================================

mod aggregation_tests {
    use super::*;

    #[tokio::test]
    async fn balances_accumulate_across_entries() {
        let (_, service) = service();
        let roles = AccountRoleMap::new();

        service
            .post_sales_entry_for_order(&order(PaymentMethod::Cash, dec!(116), dec!(16)), &roles)
            .await
            .unwrap();
        service
            .post_sales_entry_for_order(&order(PaymentMethod::Card, dec!(58), dec!(8)), &roles)
            .await
            .unwrap();

        let balances = service.balances().await.unwrap();

        assert_eq!(balances[&AccountId::from("cash")].amount(), dec!(116));
        assert_eq!(balances[&AccountId::from("bank")].amount(), dec!(58));
        assert_eq!(balances[&AccountId::from("sales")].amount(), dec!(-150));
        assert_eq!(balances[&AccountId::from("vat_output")].amount(), dec!(-24));
    }

    #[tokio::test]
    async fn aggregation_is_independent_of_entry_order() {
        let (_, service) = service();
        let roles = AccountRoleMap::new();

        service
            .post_sales_entry_for_order(&order(PaymentMethod::Cash, dec!(10), dec!(0)), &roles)
            .await
            .unwrap();
        service
            .post_sales_entry_for_order(&order(PaymentMethod::Card, dec!(20), dec!(0)), &roles)
            .await
            .unwrap();

        let mut entries = service.entries().await.unwrap();
        let forward = account_balances(&entries);
        entries.reverse();
        let reverse = account_balances(&entries);

        assert_eq!(forward, reverse);
    }
}

// ============================================================================
// Financial statements
// ============================================================================

mod statement_tests {
    use super::*;

    #[test]
    fn balance_sheet_matches_spec_scenario() {
        // balances = {cash: 200, bank: 50, receivable: 0, payable: -80,
        // vat_output: -16} -> assets 250, liabilities 96, equity 154
        let mut balances = HashMap::new();
        balances.insert(AccountId::from("cash"), eur(dec!(200)));
        balances.insert(AccountId::from("bank"), eur(dec!(50)));
        balances.insert(AccountId::from("receivable"), eur(dec!(0)));
        balances.insert(AccountId::from("payable"), eur(dec!(-80)));
        balances.insert(AccountId::from("vat_output"), eur(dec!(-16)));

        let sheet = build_balance_sheet(&balances, &AccountRoleMap::new(), Currency::EUR);

        assert_eq!(sheet.total_assets.amount(), dec!(250));
        assert_eq!(sheet.total_liabilities.amount(), dec!(96));
        assert_eq!(sheet.equity.amount(), dec!(154));
    }

    #[tokio::test]
    async fn statements_reflect_posted_history() {
        let (_, service) = service();
        let roles = AccountRoleMap::new();

        service
            .post_sales_entry_for_order(&order(PaymentMethod::Cash, dec!(116), dec!(16)), &roles)
            .await
            .unwrap();

        let sheet = service.balance_sheet(&roles).await.unwrap();
        assert_eq!(sheet.total_assets.amount(), dec!(116));
        assert_eq!(sheet.total_liabilities.amount(), dec!(16));
        assert_eq!(sheet.equity.amount(), dec!(100));

        let flow = service.cash_flow(&roles).await.unwrap();
        assert_eq!(flow.inflow.amount(), dec!(116));
        assert!(flow.outflow.is_zero());
        assert_eq!(flow.net.amount(), dec!(116));
    }

    #[tokio::test]
    async fn cash_flow_tracks_both_settlement_accounts() {
        // Debits of 300 and credits of 120 across cash+bank -> net 180
        let (_, service) = service();
        let roles = AccountRoleMap::new();

        service
            .create_journal_entry(
                EntryDraft::new(date(), "Card takings")
                    .debit("bank", eur(dec!(300)))
                    .credit("sales", eur(dec!(300))),
            )
            .await
            .unwrap();
        service
            .create_journal_entry(
                EntryDraft::new(date(), "Rent paid")
                    .debit("rent", eur(dec!(120)))
                    .credit("cash", eur(dec!(120))),
            )
            .await
            .unwrap();

        let flow = service.cash_flow(&roles).await.unwrap();
        assert_eq!(flow.inflow.amount(), dec!(300));
        assert_eq!(flow.outflow.amount(), dec!(120));
        assert_eq!(flow.net.amount(), dec!(180));
    }

    #[test]
    fn cash_flow_ignores_non_settlement_roles() {
        let roles = AccountRoleMap::new();
        let flow = cash_flow(&[], &roles, Currency::EUR);
        assert!(flow.net.is_zero());
    }
}

// ============================================================================
// Role configuration
// ============================================================================

mod role_tests {
    use super::*;

    #[test]
    fn all_roles_have_literal_fallbacks() {
        let roles = AccountRoleMap::new();

        for role in AccountRole::ALL {
            assert_eq!(roles.resolve(role).as_str(), role.key());
        }
    }

    #[test]
    fn statement_lines_expose_resolved_accounts() {
        let roles = AccountRoleMap::new().with_cash("1000");
        let sheet = build_balance_sheet(&HashMap::new(), &roles, Currency::EUR);

        assert_eq!(sheet.assets[0].role, AccountRole::Cash);
        assert_eq!(sheet.assets[0].account_id.as_str(), "1000");
        assert_eq!(sheet.assets[1].account_id.as_str(), "bank");
    }
}

// ============================================================================
// End-to-end
// ============================================================================

mod end_to_end_tests {
    use super::*;

    #[tokio::test]
    async fn a_day_of_trading() {
        let (store, service) = service();
        let roles = AccountRoleMap::new();

        // Morning float
        service
            .create_journal_entry(
                EntryDraft::new(date(), "Opening float")
                    .debit("cash", eur(dec!(150)))
                    .credit("owner_equity", eur(dec!(150))),
            )
            .await
            .unwrap();

        // Lunch service
        service
            .post_sales_entry_for_order(&order(PaymentMethod::Cash, dec!(116), dec!(16)), &roles)
            .await
            .unwrap();
        service
            .post_sales_entry_for_order(&order(PaymentMethod::Card, dec!(232), dec!(32)), &roles)
            .await
            .unwrap();

        // Produce delivery paid by bank transfer
        service
            .create_journal_entry(
                EntryDraft::new(date(), "Produce delivery")
                    .debit("food_cost", eur(dec!(85)))
                    .credit("bank", eur(dec!(85))),
            )
            .await
            .unwrap();

        assert_eq!(store.len(), 4);

        let balances = service.balances().await.unwrap();
        assert_eq!(balances[&AccountId::from("cash")].amount(), dec!(266));
        assert_eq!(balances[&AccountId::from("bank")].amount(), dec!(147));
        assert_eq!(balances[&AccountId::from("sales")].amount(), dec!(-300));
        assert_eq!(balances[&AccountId::from("vat_output")].amount(), dec!(-48));

        let sheet = service.balance_sheet(&roles).await.unwrap();
        assert_eq!(sheet.total_assets.amount(), dec!(413));
        assert_eq!(sheet.total_liabilities.amount(), dec!(48));
        assert_eq!(sheet.equity.amount(), dec!(365));

        let flow = service.cash_flow(&roles).await.unwrap();
        assert_eq!(flow.inflow.amount(), dec!(498));
        assert_eq!(flow.outflow.amount(), dec!(85));
        assert_eq!(flow.net.amount(), dec!(413));
    }

    #[tokio::test]
    async fn rejected_post_blocks_no_later_entries() {
        let (store, service) = service();

        let bad = EntryDraft::new(date(), "Fat fingered")
            .debit("cash", eur(dec!(10)))
            .credit("sales", eur(dec!(100)));
        assert!(service.create_journal_entry(bad).await.is_err());

        let good = EntryDraft::new(date(), "Corrected")
            .debit("cash", eur(dec!(100)))
            .credit("sales", eur(dec!(100)));
        assert!(service.create_journal_entry(good).await.is_ok());

        assert_eq!(store.len(), 1);
    }
}
