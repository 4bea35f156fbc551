//! Error-to-response mapping for handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

use spendtrack_core::auth::PasswordError;
use spendtrack_core::charts::UnknownChartType;
use spendtrack_core::expense::ExpenseError;
use spendtrack_core::notification::MessageTooLong;
use spendtrack_shared::types::PageError;
use spendtrack_shared::{AppError, JwtError};

/// Handler error that renders as the API's JSON error body.
///
/// Wraps [`AppError`] so handlers can propagate failures with `?` while the
/// response keeps the `{"error", "message"}` shape.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired | JwtError::DecodingError(_) => {
                Self(AppError::Unauthorized("Could not validate credentials".into()))
            }
            JwtError::EncodingError(_) | JwtError::UnsupportedAlgorithm(_) => {
                Self(AppError::Internal(err.to_string()))
            }
        }
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<UnknownChartType> for ApiError {
    fn from(err: UnknownChartType) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<MessageTooLong> for ApiError {
    fn from(err: MessageTooLong) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side causes are logged, never leaked to the client.
        let message = if status.is_server_error() {
            error!(error = %self.0, "Request failed");
            "An internal error occurred".to_string()
        } else {
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let response = ApiError(AppError::Validation("bad amount".into())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_conflict_maps_to_400() {
        let response = ApiError(AppError::Conflict("username taken".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let response = ApiError::from(DbErr::Custom("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
