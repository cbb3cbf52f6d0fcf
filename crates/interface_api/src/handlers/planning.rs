//! Planned expense handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::{PaymentId, PlannedExpenseId};
use domain_planning::{due_date_for_period, period_balances, Payment};

use crate::dto::parse_period;
use crate::dto::planning::*;
use crate::{error::ApiError, AppState};

/// Lists planned expenses with their current status
pub async fn list_planned_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlannedExpenseView>>, ApiError> {
    let today = state.today();
    let doc = state.document().await?;
    let views = doc
        .planned_expenses
        .into_iter()
        .map(|expense| PlannedExpenseView::new(expense, today))
        .collect();
    Ok(Json(views))
}

/// Creates a planned expense
pub async fn create_planned_expense(
    State(state): State<AppState>,
    Json(request): Json<PlannedExpenseRequest>,
) -> Result<(StatusCode, Json<PlannedExpenseView>), ApiError> {
    let today = state.today();
    let created = state
        .update(move |doc| {
            let definition = request.into_definition(doc.default_reminder_days())?;
            Ok(doc.add_planned_expense(definition)?.clone())
        })
        .await?;
    Ok((StatusCode::CREATED, Json(PlannedExpenseView::new(created, today))))
}

/// Redefines a planned expense, keeping its payments
pub async fn update_planned_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PlannedExpenseRequest>,
) -> Result<Json<PlannedExpenseView>, ApiError> {
    let today = state.today();
    let id = PlannedExpenseId::from_string(id);
    let updated = state
        .update(move |doc| {
            let current_reminder = doc.planned_expense(&id)?.reminder_days;
            let definition = request.into_definition(current_reminder)?;
            Ok(doc.update_planned_expense(&id, definition)?.clone())
        })
        .await?;
    Ok(Json(PlannedExpenseView::new(updated, today)))
}

/// Deletes a planned expense and its payment history
pub async fn delete_planned_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PlannedExpenseId::from_string(id);
    state
        .update(move |doc| {
            doc.remove_planned_expense(&id)?;
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists every scheduled period with owed, paid and remaining amounts
pub async fn list_periods(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PeriodsResponse>, ApiError> {
    let doc = state.document().await?;
    let expense = doc.planned_expense(&PlannedExpenseId::from_string(id))?;
    let periods = period_balances(expense)
        .into_iter()
        .map(|balance| PeriodView {
            due_date: due_date_for_period(expense, balance.period),
            balance,
        })
        .collect();

    Ok(Json(PeriodsResponse {
        expense_id: expense.id.to_string(),
        periods,
    }))
}

/// Records a payment toward one period
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    request.validate()?;
    let period = parse_period(&request.period)?;
    let id = PlannedExpenseId::from_string(id);
    let payment = state
        .update(move |doc| {
            let payment = Payment::new(request.amount, request.date, period);
            Ok(doc.record_planned_payment(&id, payment)?.clone())
        })
        .await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Removes a payment
pub async fn delete_payment(
    State(state): State<AppState>,
    Path((id, payment_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let id = PlannedExpenseId::from_string(id);
    let payment_id = PaymentId::from_string(payment_id);
    state
        .update(move |doc| {
            doc.remove_planned_payment(&id, &payment_id)?;
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
