//! User profile routes.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{delete, get, put},
};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::CurrentUser, routes::auth::user_response};
use spendtrack_db::UserRepository;
use spendtrack_shared::AppError;
use spendtrack_shared::auth::UpdateIncomeRequest;

/// Creates the user profile router (requires auth middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/me", delete(delete_me))
        .route("/update_income", put(update_income))
}

/// GET /me - Current user's profile.
async fn me(user: CurrentUser) -> impl IntoResponse {
    Json(user_response(user.0))
}

/// PUT /update_income - Set the current user's net income.
async fn update_income(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<UpdateIncomeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(income) = payload.net_income {
        if income < Decimal::ZERO {
            return Err(AppError::Validation("net income must be non-negative".into()).into());
        }
    }

    let user_repo = UserRepository::new((*state.db).clone());
    let updated = user_repo.set_net_income(user.id(), payload.net_income).await?;

    Ok(Json(user_response(updated)))
}

/// DELETE /me - Delete the current user and everything they own.
async fn delete_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let user_repo = UserRepository::new((*state.db).clone());
    user_repo.delete_account(user.id()).await?;

    info!(user_id = %user.id(), "Account deletion requested and completed");

    Ok(Json(json!({
        "status": "deleted",
        "message": "Account and all owned records deleted"
    })))
}
