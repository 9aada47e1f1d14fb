//! Financial report handlers

use axum::{extract::State, Json};

use crate::dto::reports::{BalanceSheetResponse, CashFlowResponse};
use crate::{error::ApiError, AppState};

/// Builds the balance sheet from the current ledger snapshot
pub async fn balance_sheet(
    State(state): State<AppState>,
) -> Result<Json<BalanceSheetResponse>, ApiError> {
    let sheet = state.journal.balance_sheet(&state.roles).await?;
    Ok(Json(sheet.into()))
}

/// Builds the cash flow statement from the current ledger snapshot
pub async fn cash_flow(State(state): State<AppState>) -> Result<Json<CashFlowResponse>, ApiError> {
    let flow = state.journal.cash_flow(&state.roles).await?;
    Ok(Json(flow.into()))
}
