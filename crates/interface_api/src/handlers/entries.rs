//! Income and daily expense handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use domain_wallet::{DailyExpense, Income};

use crate::dto::entries::EntryRequest;
use crate::{error::ApiError, AppState};

/// Adds an income
pub async fn create_income(
    State(state): State<AppState>,
    Json(request): Json<EntryRequest>,
) -> Result<(StatusCode, Json<Income>), ApiError> {
    request.validate()?;
    let mut income = Income::new(request.concept(), request.amount, request.date);
    if let Some(description) = request.description {
        income = income.with_description(description);
    }

    let created = state
        .update(move |doc| Ok(doc.add_income(income)?.clone()))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Adds a daily expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<EntryRequest>,
) -> Result<(StatusCode, Json<DailyExpense>), ApiError> {
    request.validate()?;
    let mut expense = DailyExpense::new(request.concept(), request.amount, request.date);
    if let Some(description) = request.description {
        expense = expense.with_description(description);
    }

    let created = state
        .update(move |doc| Ok(doc.add_expense(expense)?.clone()))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
