//! Sales posting handler

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::dto::journal::JournalEntryResponse;
use crate::dto::sales::PostSaleRequest;
use crate::{error::ApiError, AppState};

/// Posts the sales entry for a completed order
///
/// The order workflow calls this exactly once per completed order; the
/// derived entry balances by construction.
pub async fn post_sale(
    State(state): State<AppState>,
    Json(request): Json<PostSaleRequest>,
) -> Result<(StatusCode, Json<JournalEntryResponse>), ApiError> {
    request.validate()?;

    let order = request.into();
    let entry = state
        .journal
        .post_sales_entry_for_order(&order, &state.roles)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}
