//! Request/response payloads for expense endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create expense request payload.
///
/// The category travels as a string and is parsed against the fixed category
/// set server-side so unknown values map to the validation taxonomy.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseCreateRequest {
    /// Expense amount, must be non-negative.
    pub amount: Decimal,
    /// Calendar date of the expense, must not be in the future.
    pub date: NaiveDate,
    /// Category name, one of the fixed set.
    pub category: String,
}

/// Partial update payload for an expense.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseUpdateRequest {
    /// New amount.
    pub amount: Option<Decimal>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New category name.
    pub category: Option<String>,
}

impl ExpenseUpdateRequest {
    /// Returns true when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount.is_none() && self.date.is_none() && self.category.is_none()
    }
}

/// Expense record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: Uuid,
    /// Owning user ID.
    pub user_id: Uuid,
    /// Amount.
    pub amount: Decimal,
    /// Category name.
    pub category: String,
    /// Calendar date of the expense.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
