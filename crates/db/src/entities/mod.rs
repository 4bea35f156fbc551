//! `SeaORM` entity definitions.

pub mod expenses;
pub mod notifications;
pub mod users;
