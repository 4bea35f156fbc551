//! Repository abstractions for data access.

pub mod expense;
pub mod notification;
pub mod user;

pub use expense::{ExpenseChanges, ExpenseRepository};
pub use notification::NotificationRepository;
pub use user::UserRepository;
