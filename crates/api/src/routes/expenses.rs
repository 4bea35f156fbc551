//! Expense routes: create, paginated listing with chart overlays, update,
//! and delete.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::CurrentUser};
use spendtrack_core::charts::{Chart, ChartType, ExpenseFact, build_chart};
use spendtrack_core::expense::{
    ExpenseCategory, exceeds_net_income, validate_amount, validate_date,
};
use spendtrack_core::notification::INSUFFICIENT_FUNDS_MESSAGE;
use spendtrack_db::entities::expenses;
use spendtrack_db::repositories::ExpenseChanges;
use spendtrack_db::{ExpenseRepository, NotificationRepository};
use spendtrack_shared::AppError;
use spendtrack_shared::expense::{ExpenseCreateRequest, ExpenseResponse, ExpenseUpdateRequest};
use spendtrack_shared::types::PageRequest;

/// Creates the expenses router (requires auth middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense))
        .route("/expenses", get(list_expenses))
        .route("/expense/{id}", put(update_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

/// Query parameters for the expense listing.
#[derive(Debug, Deserialize)]
struct ExpenseListQuery {
    page: Option<u32>,
    limit: Option<u64>,
    category: Option<String>,
    chart_type: Option<String>,
}

/// Paginated expense listing, optionally carrying a chart series.
#[derive(Debug, Serialize)]
struct ExpenseListResponse {
    items: Vec<ExpenseResponse>,
    total: u64,
    page: u32,
    limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<Chart>,
}

fn expense_response(expense: expenses::Model) -> ExpenseResponse {
    ExpenseResponse {
        id: expense.id,
        user_id: expense.user_id,
        amount: expense.amount,
        category: expense.category,
        date: expense.date,
        created_at: expense.created_at.with_timezone(&Utc),
    }
}

fn expense_fact(expense: &expenses::Model) -> Result<ExpenseFact, ApiError> {
    let category: ExpenseCategory = expense
        .category
        .parse()
        .map_err(|_| AppError::Internal(format!("corrupt category: {}", expense.category)))?;

    Ok(ExpenseFact {
        category,
        amount: expense.amount,
        recorded_on: expense.created_at.with_timezone(&Utc).date_naive(),
    })
}

/// POST /expenses - Record a new expense.
async fn create_expense(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ExpenseCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_amount(payload.amount)?;
    let category: ExpenseCategory = payload.category.parse()?;
    validate_date(payload.date, Utc::now().date_naive())?;

    let expense_repo = ExpenseRepository::new((*state.db).clone());
    let expense = expense_repo
        .create(user.id(), payload.amount, category.as_str(), payload.date)
        .await?;

    Ok((StatusCode::CREATED, Json(expense_response(expense))))
}

/// GET /expenses - Paginated listing with optional category filter and
/// chart overlay.
async fn list_expenses(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ExpenseListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = PageRequest::from_params(query.page, query.limit)?;

    // Unknown categories and chart types are caught before touching the
    // database.
    let category = query
        .category
        .as_deref()
        .map(str::parse::<ExpenseCategory>)
        .transpose()?;

    let chart_type = query
        .chart_type
        .as_deref()
        .map(str::parse::<ChartType>)
        .transpose()?;

    let expense_repo = ExpenseRepository::new((*state.db).clone());
    let (items, total) = expense_repo
        .list(
            user.id(),
            category.map(|c| c.as_str()),
            page.offset(),
            page.limit,
        )
        .await?;

    let chart = match chart_type {
        Some(chart_type) => {
            let rows = expense_repo.all_for_user(user.id()).await?;
            let facts = rows
                .iter()
                .map(expense_fact)
                .collect::<Result<Vec<_>, _>>()?;
            Some(build_chart(chart_type, &facts, Utc::now().date_naive()))
        }
        None => None,
    };

    Ok(Json(ExpenseListResponse {
        items: items.into_iter().map(expense_response).collect(),
        total,
        page: page.page,
        limit: page.limit,
        chart,
    }))
}

/// PUT /expense/{id} - Partially update an owned expense.
///
/// When the new amount exceeds the user's recorded net income the update is
/// skipped: a notification is persisted and a soft notice is returned
/// instead of an error.
async fn update_expense(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(expense_id): Path<Uuid>,
    Json(payload): Json<ExpenseUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let expense_repo = ExpenseRepository::new((*state.db).clone());

    let Some(expense) = expense_repo.find_by_id(expense_id).await? else {
        return Err(AppError::NotFound("No expense found".into()).into());
    };
    if expense.user_id != user.id() {
        return Err(
            AppError::Forbidden("User is not authorized to update this expense".into()).into(),
        );
    }

    if let Some(amount) = payload.amount {
        validate_amount(amount)?;

        if exceeds_net_income(amount, user.user().net_income) {
            let notification_repo = NotificationRepository::new((*state.db).clone());
            notification_repo
                .create(user.id(), INSUFFICIENT_FUNDS_MESSAGE)
                .await?;

            return Ok(Json(json!({
                "status": "insufficient_funds",
                "notify": true,
                "message": INSUFFICIENT_FUNDS_MESSAGE
            }))
            .into_response());
        }
    }

    if let Some(date) = payload.date {
        validate_date(date, Utc::now().date_naive())?;
    }

    let category = payload
        .category
        .as_deref()
        .map(str::parse::<ExpenseCategory>)
        .transpose()?;

    if payload.is_empty() {
        return Ok(Json(expense_response(expense)).into_response());
    }

    let updated = expense_repo
        .update(
            expense,
            ExpenseChanges {
                amount: payload.amount,
                date: payload.date,
                category: category.map(|c| c.as_str().to_string()),
            },
        )
        .await?;

    Ok(Json(expense_response(updated)).into_response())
}

/// DELETE /expenses/{id} - Delete an owned expense.
async fn delete_expense(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(expense_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let expense_repo = ExpenseRepository::new((*state.db).clone());

    let Some(expense) = expense_repo.find_by_id(expense_id).await? else {
        return Err(AppError::NotFound("Expense not found".into()).into());
    };
    if expense.user_id != user.id() {
        return Err(
            AppError::Forbidden("User not authorized to delete this expense".into()).into(),
        );
    }

    expense_repo.delete(expense.id).await?;

    Ok(Json(json!({
        "status": "deleted",
        "message": format!("expense {expense_id} successfully deleted")
    })))
}
