//! Request/response payloads for notification endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create notification request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationCreateRequest {
    /// Message text; the system default is used when absent.
    pub message: Option<String>,
}

/// Notification record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    /// Notification ID.
    pub id: Uuid,
    /// Owning user ID.
    pub user_id: Uuid,
    /// Message text.
    pub message: String,
    /// Read flag.
    pub is_read: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Unread notification count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    /// Number of unread notifications for the caller.
    pub unread_count: u64,
}
