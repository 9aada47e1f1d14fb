//! Financial statement builders
//!
//! Both statements are pure functions: the balance sheet works on the
//! aggregated balances, the cash flow re-scans the raw entry lines. They
//! share no state and need not see the same snapshot unless handed the
//! same inputs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{AccountId, Currency, Money};

use crate::entry::JournalEntry;
use crate::roles::{AccountRole, AccountRoleMap};

/// Asset roles shown on the balance sheet, in display order
const ASSET_ROLES: [AccountRole; 3] = [AccountRole::Cash, AccountRole::Bank, AccountRole::Receivable];

/// Liability roles shown on the balance sheet, in display order
const LIABILITY_ROLES: [AccountRole; 2] = [AccountRole::Payable, AccountRole::VatOutput];

/// One displayed line of a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    /// The role this line reports
    pub role: AccountRole,
    /// The account the role resolved to
    pub account_id: AccountId,
    /// Displayed amount, clamped at zero
    pub amount: Money,
}

/// Balance sheet derived from aggregated balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub assets: Vec<StatementLine>,
    pub liabilities: Vec<StatementLine>,
    pub total_assets: Money,
    pub total_liabilities: Money,
    /// Residual: whatever balances the sheet, no equity ledger role exists
    pub equity: Money,
    /// Exposed separately because clamping can break the visual identity
    /// with `total_assets` when a role balance has an unexpected sign
    pub total_liabilities_and_equity: Money,
}

/// Builds the balance sheet from aggregated balances
///
/// Displayed asset amounts are `max(0, balance)`; liability amounts are
/// `max(0, -balance)` since credit-normal accounts are negative under the
/// debit-normal sign convention. The clamp is display behavior, not a
/// correction entry.
pub fn build_balance_sheet(
    balances: &HashMap<AccountId, Money>,
    roles: &AccountRoleMap,
    currency: Currency,
) -> BalanceSheet {
    let zero = Money::zero(currency);
    let balance_of = |id: &AccountId| balances.get(id).copied().unwrap_or(zero);

    let assets: Vec<StatementLine> = ASSET_ROLES
        .iter()
        .map(|&role| {
            let account_id = roles.resolve(role);
            let balance = balance_of(&account_id);
            let amount = if balance.is_negative() { zero } else { balance };
            StatementLine {
                role,
                account_id,
                amount,
            }
        })
        .collect();

    let liabilities: Vec<StatementLine> = LIABILITY_ROLES
        .iter()
        .map(|&role| {
            let account_id = roles.resolve(role);
            let balance = balance_of(&account_id);
            let amount = if balance.is_negative() { -balance } else { zero };
            StatementLine {
                role,
                account_id,
                amount,
            }
        })
        .collect();

    let total_assets = assets.iter().fold(zero, |acc, line| acc + line.amount);
    let total_liabilities = liabilities.iter().fold(zero, |acc, line| acc + line.amount);
    let equity = total_assets - total_liabilities;

    BalanceSheet {
        assets,
        liabilities,
        total_assets,
        total_liabilities,
        equity,
        total_liabilities_and_equity: total_liabilities + equity,
    }
}

/// Direct-method cash flow over the raw entry lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Sum of debits into the cash and bank accounts
    pub inflow: Money,
    /// Sum of credits out of the cash and bank accounts
    pub outflow: Money,
    /// `inflow - outflow`
    pub net: Money,
}

/// Scans every line of every entry for movements on the cash/bank roles
pub fn cash_flow(entries: &[JournalEntry], roles: &AccountRoleMap, currency: Currency) -> CashFlow {
    let cash = roles.resolve(AccountRole::Cash);
    let bank = roles.resolve(AccountRole::Bank);

    let mut inflow = Money::zero(currency);
    let mut outflow = Money::zero(currency);

    for entry in entries {
        for line in &entry.lines {
            if line.account_id == cash || line.account_id == bank {
                inflow = inflow + line.debit;
                outflow = outflow + line.credit;
            }
        }
    }

    CashFlow {
        inflow,
        outflow,
        net: inflow - outflow,
    }
}
