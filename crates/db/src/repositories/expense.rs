//! Expense repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::expenses;

/// Partial update for an expense; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    /// New amount.
    pub amount: Option<Decimal>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New category name.
    pub category: Option<String>,
}

/// Expense repository for CRUD and listing queries.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new expense for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_id: Uuid,
        amount: Decimal,
        category: &str,
        date: NaiveDate,
    ) -> Result<expenses::Model, DbErr> {
        let expense = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            amount: Set(amount),
            category: Set(category.to_string()),
            date: Set(date),
            created_at: Set(chrono::Utc::now().into()),
        };

        expense.insert(&self.db).await
    }

    /// Finds an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<expenses::Model>, DbErr> {
        expenses::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists a page of a user's expenses, newest first, with the total row
    /// count before paging.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn list(
        &self,
        user_id: Uuid,
        category: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<expenses::Model>, u64), DbErr> {
        let mut query = expenses::Entity::find().filter(expenses::Column::UserId.eq(user_id));

        if let Some(category) = category {
            query = query.filter(expenses::Column::Category.eq(category));
        }

        let total = query.clone().count(&self.db).await?;

        let items = query
            .order_by_desc(expenses::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok((items, total))
    }

    /// Fetches all of a user's expenses, oldest first, for chart
    /// aggregation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all_for_user(&self, user_id: Uuid) -> Result<Vec<expenses::Model>, DbErr> {
        expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_asc(expenses::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Applies a partial update to an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        expense: expenses::Model,
        changes: ExpenseChanges,
    ) -> Result<expenses::Model, DbErr> {
        let mut active: expenses::ActiveModel = expense.into();

        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        if let Some(category) = changes.category {
            active.category = Set(category);
        }

        active.update(&self.db).await
    }

    /// Hard-deletes an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        expenses::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
