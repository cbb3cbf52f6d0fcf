//! Report handlers

use axum::{
    extract::{Path, State},
    Json,
};

use domain_wallet::MonthlyReport;

use crate::dto::parse_period;
use crate::{error::ApiError, AppState};

/// Income, spending and budget usage for one month
pub async fn monthly_report(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<Json<MonthlyReport>, ApiError> {
    let month = parse_period(&period)?;
    let doc = state.document().await?;
    Ok(Json(MonthlyReport::build(&doc, month)))
}
