//! Notification repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::notifications;

/// Notification repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    db: DatabaseConnection,
}

impl NotificationRepository {
    /// Creates a new notification repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unread notification for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_id: Uuid,
        message: &str,
    ) -> Result<notifications::Model, DbErr> {
        let notification = notifications::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            message: Set(message.to_string()),
            is_read: Set(false),
            created_at: Set(chrono::Utc::now().into()),
        };

        notification.insert(&self.db).await
    }

    /// Finds a notification by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<notifications::Model>, DbErr> {
        notifications::Entity::find_by_id(id).one(&self.db).await
    }

    /// Marks a notification as read.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn mark_read(&self, id: Uuid) -> Result<notifications::Model, DbErr> {
        notifications::ActiveModel {
            id: Set(id),
            is_read: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
    }

    /// Lists all of a user's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<notifications::Model>, DbErr> {
        notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .order_by_desc(notifications::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Counts a user's unread notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn unread_count(&self, user_id: Uuid) -> Result<u64, DbErr> {
        notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .filter(notifications::Column::IsRead.eq(false))
            .count(&self.db)
            .await
    }

    /// Hard-deletes a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        notifications::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
