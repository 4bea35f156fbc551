//! Initial database migration.
//!
//! Creates the users, expenses, and notifications tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;
        db.execute_unprepared(NOTIFICATIONS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS notifications CASCADE;
             DROP TABLE IF EXISTS expenses CASCADE;
             DROP TABLE IF EXISTS users CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const USERS_SQL: &str = r"
-- Users table; one active refresh token per user, stored hashed
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(50) NOT NULL UNIQUE,
    email VARCHAR(50) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    net_income NUMERIC(10,2),
    refresh_token_hash VARCHAR(64),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_users_net_income CHECK (net_income IS NULL OR net_income >= 0)
);
";

const EXPENSES_SQL: &str = r"
-- Expenses table, scoped to a user
CREATE TABLE expenses (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    amount NUMERIC(10,2) NOT NULL,
    category VARCHAR(20) NOT NULL,
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expenses_amount CHECK (amount >= 0),
    CONSTRAINT chk_expenses_category CHECK (
        category IN ('Food', 'Savings', 'Health', 'Education', 'Transport', 'Clothing')
    )
);

-- Index for the paginated listing
CREATE INDEX idx_expenses_user_created ON expenses(user_id, created_at DESC);

-- Index for date-scoped aggregation
CREATE INDEX idx_expenses_user_date ON expenses(user_id, date);
";

const NOTIFICATIONS_SQL: &str = r"
-- Notifications table with read/unread state
CREATE TABLE notifications (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    message VARCHAR(200) NOT NULL,
    is_read BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Index for the newest-first listing
CREATE INDEX idx_notifications_user_created ON notifications(user_id, created_at DESC);

-- Index for the unread count
CREATE INDEX idx_notifications_unread ON notifications(user_id) WHERE is_read = FALSE;
";
