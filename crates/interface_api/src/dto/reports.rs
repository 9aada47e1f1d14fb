//! Financial report DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_ledger::{AccountRole, BalanceSheet, CashFlow, StatementLine};

/// One line of the balance sheet
#[derive(Debug, Serialize, Deserialize)]
pub struct StatementLineResponse {
    pub role: AccountRole,
    pub account_id: String,
    pub amount: Decimal,
}

impl From<&StatementLine> for StatementLineResponse {
    fn from(line: &StatementLine) -> Self {
        Self {
            role: line.role,
            account_id: line.account_id.to_string(),
            amount: line.amount.amount(),
        }
    }
}

/// Balance sheet report
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceSheetResponse {
    pub assets: Vec<StatementLineResponse>,
    pub liabilities: Vec<StatementLineResponse>,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub equity: Decimal,
    pub total_liabilities_and_equity: Decimal,
    pub currency: String,
}

impl From<BalanceSheet> for BalanceSheetResponse {
    fn from(sheet: BalanceSheet) -> Self {
        Self {
            assets: sheet.assets.iter().map(Into::into).collect(),
            liabilities: sheet.liabilities.iter().map(Into::into).collect(),
            total_assets: sheet.total_assets.amount(),
            total_liabilities: sheet.total_liabilities.amount(),
            equity: sheet.equity.amount(),
            total_liabilities_and_equity: sheet.total_liabilities_and_equity.amount(),
            currency: sheet.total_assets.currency().code().to_string(),
        }
    }
}

/// Cash flow report
#[derive(Debug, Serialize, Deserialize)]
pub struct CashFlowResponse {
    pub inflow: Decimal,
    pub outflow: Decimal,
    pub net: Decimal,
    pub currency: String,
}

impl From<CashFlow> for CashFlowResponse {
    fn from(flow: CashFlow) -> Self {
        Self {
            inflow: flow.inflow.amount(),
            outflow: flow.outflow.amount(),
            net: flow.net.amount(),
            currency: flow.net.currency().code().to_string(),
        }
    }
}
