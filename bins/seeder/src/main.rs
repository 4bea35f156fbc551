//! Database seeder for Spendtrack development and testing.
//!
//! Seeds a demo user with a spread of expenses and a welcome notification
//! so the listing and chart endpoints have data to show.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use spendtrack_core::ExpenseCategory;
use spendtrack_core::auth::hash_password;
use spendtrack_db::{ExpenseRepository, NotificationRepository, UserRepository, connect};

/// Demo account credentials (development only).
const DEMO_USERNAME: &str = "demo_user";
const DEMO_EMAIL: &str = "demo@spendtrack.dev";
const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let user_repo = UserRepository::new(db.clone());

    if let Some(existing) = user_repo
        .find_by_username(DEMO_USERNAME)
        .await
        .expect("Failed to look up demo user")
    {
        println!("Removing previous demo data...");
        user_repo
            .delete_account(existing.id)
            .await
            .expect("Failed to remove previous demo user");
    }

    println!("Seeding demo user...");
    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");
    let user = user_repo
        .create(DEMO_USERNAME, DEMO_EMAIL, &password_hash, Some(dec!(2500)))
        .await
        .expect("Failed to create demo user");

    println!("Seeding expenses...");
    let expense_repo = ExpenseRepository::new(db.clone());
    let today = Utc::now().date_naive();
    let expenses: [(ExpenseCategory, Decimal, i64); 6] = [
        (ExpenseCategory::Food, dec!(42.50), 0),
        (ExpenseCategory::Transport, dec!(12.00), 0),
        (ExpenseCategory::Health, dec!(89.90), 3),
        (ExpenseCategory::Education, dec!(150.00), 10),
        (ExpenseCategory::Clothing, dec!(64.99), 17),
        (ExpenseCategory::Savings, dec!(300.00), 30),
    ];
    for (category, amount, days_ago) in expenses {
        let date = today - Duration::days(days_ago);
        expense_repo
            .create(user.id, amount, category.as_str(), date)
            .await
            .expect("Failed to create demo expense");
    }

    println!("Seeding notification...");
    NotificationRepository::new(db.clone())
        .create(user.id, "Welcome to Spendtrack")
        .await
        .expect("Failed to create demo notification");

    println!("Seeding complete!");
}
