//! User repository for database operations.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::entities::{expenses, notifications, users};

/// User repository for CRUD operations and refresh-token rotation.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Hashes a refresh token for storage and comparison.
    ///
    /// Only the SHA-256 hash of a refresh token is ever persisted.
    #[must_use]
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(&self.db).await
    }

    /// Checks if a username is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails (including unique
    /// violations racing past the existence checks).
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        net_income: Option<Decimal>,
    ) -> Result<users::Model, DbErr> {
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            net_income: Set(net_income),
            refresh_token_hash: Set(None),
            created_at: Set(chrono::Utc::now().into()),
        };

        user.insert(&self.db).await
    }

    /// Sets a user's net income.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn set_net_income(
        &self,
        user_id: Uuid,
        net_income: Option<Decimal>,
    ) -> Result<users::Model, DbErr> {
        users::ActiveModel {
            id: Set(user_id),
            net_income: Set(net_income),
            ..Default::default()
        }
        .update(&self.db)
        .await
    }

    /// Overwrites the stored refresh-token hash (rotation).
    ///
    /// The previous token stops validating as soon as this commits; a user
    /// holds at most one live refresh token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn rotate_refresh_token(
        &self,
        user_id: Uuid,
        refresh_token: &str,
    ) -> Result<(), DbErr> {
        users::ActiveModel {
            id: Set(user_id),
            refresh_token_hash: Set(Some(Self::hash_token(refresh_token))),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        Ok(())
    }

    /// Deletes a user and everything they own in one transaction.
    ///
    /// The cascade is explicit: expenses and notifications go first, then
    /// the user row.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement in the transaction fails.
    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let expenses_deleted = expenses::Entity::delete_many()
            .filter(expenses::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;

        let notifications_deleted = notifications::Entity::delete_many()
            .filter(notifications::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;

        users::Entity::delete_by_id(user_id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            expenses_deleted,
            notifications_deleted,
            "User account deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = UserRepository::hash_token("some-refresh-token");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_token_distinguishes_tokens() {
        // Rotation relies on the old token hashing differently.
        let first = UserRepository::hash_token("token-a");
        let second = UserRepository::hash_token("token-b");
        assert_ne!(first, second);
        assert_eq!(first, UserRepository::hash_token("token-a"));
    }
}
