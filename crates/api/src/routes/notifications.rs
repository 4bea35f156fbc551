//! Notification routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::CurrentUser};
use spendtrack_core::notification::resolve_message;
use spendtrack_db::NotificationRepository;
use spendtrack_db::entities::notifications;
use spendtrack_shared::AppError;
use spendtrack_shared::notification::{
    NotificationCreateRequest, NotificationResponse, UnreadCountResponse,
};

/// Creates the notifications router (requires auth middleware).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notification", post(create_notification))
        .route("/notification/{id}", put(mark_notification_read))
        .route("/notification/{id}", delete(delete_notification))
        .route("/notifications", get(unread_notifications))
        .route("/notifications/details", get(notification_details))
}

fn notification_response(notification: notifications::Model) -> NotificationResponse {
    NotificationResponse {
        id: notification.id,
        user_id: notification.user_id,
        message: notification.message,
        is_read: notification.is_read,
        created_at: notification.created_at.with_timezone(&Utc),
    }
}

/// POST /notification - Create a notification; the body and its message are
/// both optional.
async fn create_notification(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Option<Json<NotificationCreateRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let message = resolve_message(payload.and_then(|Json(p)| p.message))?;

    let notification_repo = NotificationRepository::new((*state.db).clone());
    let notification = notification_repo.create(user.id(), &message).await?;

    Ok((
        StatusCode::CREATED,
        Json(notification_response(notification)),
    ))
}

/// PUT /notification/{id} - Mark an owned notification as read.
async fn mark_notification_read(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let notification_repo = NotificationRepository::new((*state.db).clone());

    let Some(notification) = notification_repo.find_by_id(notification_id).await? else {
        return Err(AppError::NotFound("Notification not found".into()).into());
    };
    if notification.user_id != user.id() {
        return Err(AppError::Forbidden(
            "User not authorized to update this notification".into(),
        )
        .into());
    }

    let updated = notification_repo.mark_read(notification.id).await?;

    Ok(Json(notification_response(updated)))
}

/// GET /notifications - Unread count for the current user.
async fn unread_notifications(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let notification_repo = NotificationRepository::new((*state.db).clone());
    let unread_count = notification_repo.unread_count(user.id()).await?;

    Ok(Json(UnreadCountResponse { unread_count }))
}

/// GET /notifications/details - All notifications, newest first.
async fn notification_details(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let notification_repo = NotificationRepository::new((*state.db).clone());
    let notifications = notification_repo.list_for_user(user.id()).await?;

    let response: Vec<NotificationResponse> = notifications
        .into_iter()
        .map(notification_response)
        .collect();

    Ok(Json(response))
}

/// DELETE /notification/{id} - Delete an owned notification.
async fn delete_notification(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let notification_repo = NotificationRepository::new((*state.db).clone());

    let Some(notification) = notification_repo.find_by_id(notification_id).await? else {
        return Err(AppError::NotFound("Notification not found".into()).into());
    };
    if notification.user_id != user.id() {
        return Err(AppError::Forbidden(
            "User not authorized to delete this notification".into(),
        )
        .into());
    }

    notification_repo.delete(notification.id).await?;

    Ok(Json(json!({
        "status": "deleted",
        "message": format!("Notification {notification_id} deleted successfully")
    })))
}
