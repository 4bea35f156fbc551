//! Core business logic for Spendtrack.
//!
//! This crate holds the pure rules of the system, free of web and database
//! dependencies:
//! - Password hashing with Argon2id
//! - Expense validation (amount, category, date) and the net-income guard
//! - Chart aggregation math for the expense listing
//! - Notification message rules

pub mod auth;
pub mod charts;
pub mod expense;
pub mod notification;

pub use expense::ExpenseCategory;
