//! Account types for the chart of accounts

use serde::{Deserialize, Serialize};

use core_kernel::AccountId;

/// Types of accounts in the chart of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Asset accounts (debit normal balance)
    Asset,
    /// Liability accounts (credit normal balance)
    Liability,
    /// Equity accounts (credit normal balance)
    Equity,
    /// Revenue accounts (credit normal balance)
    Revenue,
    /// Expense accounts (debit normal balance)
    Expense,
}

impl AccountType {
    /// Returns true if this account type has a debit normal balance
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, AccountType::Asset | AccountType::Expense)
    }
}

/// An account in the chart of accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account code, e.g. "cash" or "vat_output"
    pub id: AccountId,
    /// Display name
    pub name: String,
    /// Account type
    pub account_type: AccountType,
    /// Description
    pub description: Option<String>,
    /// Whether the account is active
    pub is_active: bool,
}

impl Account {
    /// Creates a new active account
    pub fn new(
        id: impl Into<AccountId>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type,
            description: None,
            is_active: true,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Standard chart of accounts for a restaurant
pub struct RestaurantChartOfAccounts;

impl RestaurantChartOfAccounts {
    /// Creates the default accounts the role map points at
    pub fn standard() -> Vec<Account> {
        vec![
            // Assets
            Account::new("cash", "Cash Drawer", AccountType::Asset)
                .with_description("Till cash, counted at close"),
            Account::new("bank", "Bank Account", AccountType::Asset)
                .with_description("Card and IBAN settlements"),
            Account::new("receivable", "Accounts Receivable", AccountType::Asset),
            Account::new("equipment", "Kitchen Equipment", AccountType::Asset),
            // Liabilities
            Account::new("payable", "Accounts Payable", AccountType::Liability)
                .with_description("Open vendor bills"),
            Account::new("vat_output", "VAT Collected", AccountType::Liability),
            // Equity
            Account::new("owner_equity", "Owner's Equity", AccountType::Equity),
            // Revenue
            Account::new("sales", "Food & Beverage Sales", AccountType::Revenue),
            // Expenses
            Account::new("food_cost", "Food Cost", AccountType::Expense),
            Account::new("wages", "Wages", AccountType::Expense),
            Account::new("rent", "Rent", AccountType::Expense),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_is_debit_normal() {
        assert!(AccountType::Asset.is_debit_normal());
        assert!(AccountType::Expense.is_debit_normal());
        assert!(!AccountType::Liability.is_debit_normal());
        assert!(!AccountType::Equity.is_debit_normal());
        assert!(!AccountType::Revenue.is_debit_normal());
    }

    #[test]
    fn test_account_new() {
        let account = Account::new("cash", "Cash Drawer", AccountType::Asset);

        assert_eq!(account.id.as_str(), "cash");
        assert_eq!(account.name, "Cash Drawer");
        assert!(account.is_active);
        assert!(account.description.is_none());
    }

    #[test]
    fn test_standard_chart_covers_role_defaults() {
        use crate::roles::AccountRole;

        let chart = RestaurantChartOfAccounts::standard();

        for role in AccountRole::ALL {
            assert!(
                chart.iter().any(|a| a.id == role.default_account_id()),
                "missing account for role {}",
                role
            );
        }
    }

    #[test]
    fn test_standard_chart_has_all_types() {
        let chart = RestaurantChartOfAccounts::standard();

        for account_type in [
            AccountType::Asset,
            AccountType::Liability,
            AccountType::Equity,
            AccountType::Revenue,
            AccountType::Expense,
        ] {
            assert!(chart.iter().any(|a| a.account_type == account_type));
        }
    }
}
