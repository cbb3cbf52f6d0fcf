//! Dashboard and calendar handlers

use axum::{
    extract::{Path, State},
    Json,
};

use domain_planning::{active_reminders, calendar_month, upcoming_dues};

use crate::dto::agenda::{CalendarResponse, UpcomingResponse};
use crate::dto::parse_period;
use crate::{error::ApiError, AppState};

/// Unsettled bills, most pressing first, plus the ones with an open reminder
pub async fn upcoming(State(state): State<AppState>) -> Result<Json<UpcomingResponse>, ApiError> {
    let today = state.today();
    let doc = state.document().await?;
    let items = upcoming_dues(&doc.planned_expenses, today);
    let reminders = active_reminders(&doc.planned_expenses, today);
    Ok(Json(UpcomingResponse::new(today, items, reminders, &doc)))
}

/// Due dates falling inside one month
pub async fn calendar(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<Json<CalendarResponse>, ApiError> {
    let month = parse_period(&period)?;
    let doc = state.document().await?;
    let marks = calendar_month(&doc.planned_expenses, month);
    let total_owed = marks.iter().filter(|m| !m.settled).map(|m| m.owed - m.paid).sum();

    Ok(Json(CalendarResponse {
        period: month.to_string(),
        marks,
        total_owed,
    }))
}
