//! Journal handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::dto::journal::{CreateJournalEntryRequest, JournalEntryResponse};
use crate::{error::ApiError, AppState};

/// Lists the full journal, newest first
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<JournalEntryResponse>>, ApiError> {
    let entries = state.journal.entries().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Creates a manual journal entry
///
/// Responds 422 when the lines do not balance; nothing is written in that
/// case.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateJournalEntryRequest>,
) -> Result<(StatusCode, Json<JournalEntryResponse>), ApiError> {
    request.validate()?;

    let draft = request.into_draft(state.journal.currency());
    let entry = state.journal.create_journal_entry(draft).await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}
