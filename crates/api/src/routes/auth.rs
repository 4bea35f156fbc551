//! Authentication routes for signup, login, and token refresh.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::{AppState, error::ApiError};
use spendtrack_core::auth::{hash_password, verify_password};
use spendtrack_db::UserRepository;
use spendtrack_db::entities::users;
use spendtrack_shared::auth::{
    LoginRequest, RefreshRequest, SignupRequest, TokenResponse, UserResponse,
};
use spendtrack_shared::{AppError, JwtError};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
}

/// Builds the public profile view of a user row.
pub(crate) fn user_response(user: users::Model) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        net_income: user.net_income,
        created_at: user.created_at.with_timezone(&Utc),
    }
}

/// POST /signup - Register a new user.
async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if let Some(income) = payload.net_income {
        if income < rust_decimal::Decimal::ZERO {
            return Err(AppError::Validation("net income must be non-negative".into()).into());
        }
    }

    let user_repo = UserRepository::new((*state.db).clone());

    if user_repo.username_exists(&payload.username).await? {
        return Err(AppError::Conflict("User already exists".into()).into());
    }
    if user_repo.email_exists(&payload.email).await? {
        return Err(AppError::Conflict("An account with this email already exists".into()).into());
    }

    let password_hash = hash_password(&payload.password)?;

    let user = user_repo
        .create(
            &payload.username,
            &payload.email,
            &password_hash,
            payload.net_income,
        )
        .await?;

    info!(user_id = %user.id, username = %user.username, "New user registered");

    Ok((StatusCode::CREATED, Json(user_response(user))))
}

/// POST /login - Authenticate a user and return a fresh token pair.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_repo = UserRepository::new((*state.db).clone());

    let Some(user) = user_repo.find_by_username(&payload.username).await? else {
        info!(username = %payload.username, "Login attempt for non-existent user");
        return Err(AppError::Unauthorized("invalid credentials".into()).into());
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(AppError::Unauthorized("invalid credentials".into()).into());
    }

    let access_token = state.jwt.generate_access_token(&user.username)?;
    let refresh_token = state.jwt.generate_refresh_token(&user.username)?;

    // The stored hash is replaced, not appended: one live refresh token per user.
    user_repo
        .rotate_refresh_token(user.id, &refresh_token)
        .await?;

    info!(user_id = %user.id, "User logged in successfully");

    Ok(Json(TokenResponse::bearer(
        access_token,
        refresh_token,
        state.jwt.access_token_expires_in(),
    )))
}

/// POST /refresh - Rotate the refresh token and mint a new pair.
async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let claims = state
        .jwt
        .validate_token(&payload.refresh_token)
        .map_err(|e| match e {
            JwtError::Expired => AppError::Unauthorized("Refresh token has expired".into()),
            _ => AppError::Unauthorized("Invalid refresh token".into()),
        })?;

    let user_repo = UserRepository::new((*state.db).clone());

    let Some(user) = user_repo.find_by_username(claims.username()).await? else {
        return Err(AppError::Unauthorized("Invalid refresh token".into()).into());
    };

    // The presented token must match the single stored one; anything else
    // (no stored token, or an already-rotated one) is rejected.
    let presented_hash = UserRepository::hash_token(&payload.refresh_token);
    if user.refresh_token_hash.as_deref() != Some(presented_hash.as_str()) {
        return Err(AppError::Unauthorized("Invalid refresh token".into()).into());
    }

    let access_token = state.jwt.generate_access_token(&user.username)?;
    let refresh_token = state.jwt.generate_refresh_token(&user.username)?;

    user_repo
        .rotate_refresh_token(user.id, &refresh_token)
        .await?;

    info!(user_id = %user.id, "Refresh token rotated");

    Ok(Json(TokenResponse::bearer(
        access_token,
        refresh_token,
        state.jwt.access_token_expires_in(),
    )))
}
