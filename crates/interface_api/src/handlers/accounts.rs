//! Chart of accounts handler

use axum::{extract::State, Json};
use rust_decimal::Decimal;

use domain_ledger::RestaurantChartOfAccounts;

use crate::dto::accounts::AccountResponse;
use crate::{error::ApiError, AppState};

/// Lists the chart of accounts with current balances
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let balances = state.journal.balances().await?;

    let accounts = RestaurantChartOfAccounts::standard()
        .into_iter()
        .map(|account| {
            let balance = balances
                .get(&account.id)
                .map(|money| money.amount())
                .unwrap_or(Decimal::ZERO);
            AccountResponse::from_account(account, balance)
        })
        .collect();

    Ok(Json(accounts))
}
