//! Account role configuration
//!
//! Statements and posting rules never hardcode account ids; they look them
//! up through an [`AccountRoleMap`] passed explicitly into every call. A
//! role left unmapped resolves to its own lowercase name as a literal
//! account id, which existing ledgers rely on.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::AccountId;

/// Fixed semantic slots an account can play in the statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Cash drawer
    Cash,
    /// Bank / card settlement account
    Bank,
    /// Sales revenue
    Sales,
    /// VAT collected on sales
    VatOutput,
    /// Accounts receivable
    Receivable,
    /// Accounts payable
    Payable,
}

impl AccountRole {
    /// All roles, in statement display order
    pub const ALL: [AccountRole; 6] = [
        AccountRole::Cash,
        AccountRole::Bank,
        AccountRole::Sales,
        AccountRole::VatOutput,
        AccountRole::Receivable,
        AccountRole::Payable,
    ];

    /// The role's configuration key, also its fallback account id
    pub fn key(&self) -> &'static str {
        match self {
            AccountRole::Cash => "cash",
            AccountRole::Bank => "bank",
            AccountRole::Sales => "sales",
            AccountRole::VatOutput => "vat_output",
            AccountRole::Receivable => "receivable",
            AccountRole::Payable => "payable",
        }
    }

    /// The literal account id used when the role is unmapped
    pub fn default_account_id(&self) -> AccountId {
        AccountId::from(self.key())
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Mapping of account roles to concrete account ids
///
/// Every field is optional; [`AccountRoleMap::resolve`] falls back to the
/// literal role name for unmapped roles and leaves a debug breadcrumb so
/// incomplete configuration is observable in the logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRoleMap {
    pub cash: Option<AccountId>,
    pub bank: Option<AccountId>,
    pub sales: Option<AccountId>,
    pub vat_output: Option<AccountId>,
    pub receivable: Option<AccountId>,
    pub payable: Option<AccountId>,
}

impl AccountRoleMap {
    /// Creates an empty map; every role resolves to its literal name
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cash account
    pub fn with_cash(mut self, id: impl Into<AccountId>) -> Self {
        self.cash = Some(id.into());
        self
    }

    /// Sets the bank account
    pub fn with_bank(mut self, id: impl Into<AccountId>) -> Self {
        self.bank = Some(id.into());
        self
    }

    /// Sets the sales revenue account
    pub fn with_sales(mut self, id: impl Into<AccountId>) -> Self {
        self.sales = Some(id.into());
        self
    }

    /// Sets the VAT output account
    pub fn with_vat_output(mut self, id: impl Into<AccountId>) -> Self {
        self.vat_output = Some(id.into());
        self
    }

    /// Sets the accounts receivable account
    pub fn with_receivable(mut self, id: impl Into<AccountId>) -> Self {
        self.receivable = Some(id.into());
        self
    }

    /// Sets the accounts payable account
    pub fn with_payable(mut self, id: impl Into<AccountId>) -> Self {
        self.payable = Some(id.into());
        self
    }

    /// Resolves a role to its configured account id, or the literal role
    /// name when unmapped
    pub fn resolve(&self, role: AccountRole) -> AccountId {
        let mapped = match role {
            AccountRole::Cash => &self.cash,
            AccountRole::Bank => &self.bank,
            AccountRole::Sales => &self.sales,
            AccountRole::VatOutput => &self.vat_output,
            AccountRole::Receivable => &self.receivable,
            AccountRole::Payable => &self.payable,
        };

        match mapped {
            Some(id) => id.clone(),
            None => {
                tracing::debug!(role = %role, "account role unmapped, using literal code");
                role.default_account_id()
            }
        }
    }
}
