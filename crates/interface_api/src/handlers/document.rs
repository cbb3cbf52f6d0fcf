//! Whole-document handlers

use axum::{extract::State, Json};

use domain_wallet::AppData;

use crate::{error::ApiError, AppState};

/// Returns the full wallet document
pub async fn get_document(State(state): State<AppState>) -> Result<Json<AppData>, ApiError> {
    Ok(Json(state.document().await?))
}

/// Replaces the full wallet document
///
/// Used by clients that sync or restore a backup. Planned expense
/// definitions are validated; everything else is stored as received.
pub async fn replace_document(
    State(state): State<AppState>,
    Json(doc): Json<AppData>,
) -> Result<Json<AppData>, ApiError> {
    doc.validate_planned_expenses()?;
    tracing::info!(
        planned_expenses = doc.planned_expenses.len(),
        incomes = doc.incomes.len(),
        expenses = doc.expenses.len(),
        "Replacing document"
    );
    let saved = state
        .update(move |current| {
            *current = doc;
            Ok(current.clone())
        })
        .await?;
    Ok(Json(saved))
}
