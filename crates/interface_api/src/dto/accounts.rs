//! Chart of accounts DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_ledger::{Account, AccountType};

/// An account with its current debit-normal balance
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    pub description: Option<String>,
    pub is_active: bool,
    /// Signed debit-normal balance; zero for untouched accounts
    pub balance: Decimal,
}

impl AccountResponse {
    /// Builds the response from an account and its aggregated balance
    pub fn from_account(account: Account, balance: Decimal) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            account_type: account.account_type,
            description: account.description,
            is_active: account.is_active,
            balance,
        }
    }
}
