//! Pre-built Test Fixtures
//!
//! Ready-to-use, deterministic test data for common entities.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::str::FromStr;

use core_kernel::{Currency, Money, OrderId};
use domain_ledger::AccountRoleMap;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard EUR amount
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// The canonical gross receipt used across the accounting tests
    pub fn eur_gross_receipt() -> Money {
        Money::new(dec!(116.00), Currency::EUR)
    }

    /// The VAT portion of the canonical receipt
    pub fn eur_vat() -> Money {
        Money::new(dec!(16.00), Currency::EUR)
    }

    /// A zero amount
    pub fn eur_zero() -> Money {
        Money::zero(Currency::EUR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard accounting date used in tests
    pub fn accounting_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
    }

    /// Standard invoice due date
    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// A date safely after the due date
    pub fn past_due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A deterministic order id
    pub fn order_id() -> OrderId {
        OrderId::from_str("550e8400-e29b-41d4-a716-446655440001").unwrap()
    }
}

/// Fixture for account role configurations
pub struct RoleFixtures;

impl RoleFixtures {
    /// The default map; every role resolves to its literal name
    pub fn literal() -> AccountRoleMap {
        AccountRoleMap::new()
    }

    /// A numbered chart, the way an accountant would configure it
    pub fn numbered() -> AccountRoleMap {
        AccountRoleMap::new()
            .with_cash("1000")
            .with_bank("1010")
            .with_receivable("1100")
            .with_payable("2000")
            .with_vat_output("2100")
            .with_sales("4000")
    }
}
