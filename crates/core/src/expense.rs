//! Expense validation rules.
//!
//! The fixed category set, amount/date checks applied on create and update,
//! and the net-income guard behind the soft "insufficient funds" notice.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed expense category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Groceries and eating out.
    Food,
    /// Money set aside.
    Savings,
    /// Medical and wellness.
    Health,
    /// Tuition, courses, books.
    Education,
    /// Commuting and travel.
    Transport,
    /// Apparel.
    Clothing,
}

impl ExpenseCategory {
    /// All categories, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Savings,
        Self::Health,
        Self::Education,
        Self::Transport,
        Self::Clothing,
    ];

    /// Returns the canonical name used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Savings => "Savings",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Transport => "Transport",
            Self::Clothing => "Clothing",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ExpenseError::UnknownCategory(s.to_string()))
    }
}

/// Errors raised by expense validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// Amount below zero.
    #[error("amount must be non-negative")]
    NegativeAmount,

    /// Category outside the fixed set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Expense dated after today.
    #[error("date cannot be ahead of the current date")]
    FutureDate,
}

/// Checks that an amount is non-negative.
///
/// # Errors
///
/// Returns `ExpenseError::NegativeAmount` for amounts below zero.
pub fn validate_amount(amount: Decimal) -> Result<(), ExpenseError> {
    if amount < Decimal::ZERO {
        return Err(ExpenseError::NegativeAmount);
    }
    Ok(())
}

/// Checks that an expense date is not in the future.
///
/// # Errors
///
/// Returns `ExpenseError::FutureDate` for dates after `today`.
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<(), ExpenseError> {
    if date > today {
        return Err(ExpenseError::FutureDate);
    }
    Ok(())
}

/// Net-income guard for expense updates.
///
/// Fires only when an income is recorded and the new amount exceeds it; a
/// user without a recorded income is never warned.
#[must_use]
pub fn exceeds_net_income(amount: Decimal, net_income: Option<Decimal>) -> bool {
    match net_income {
        Some(income) => amount > income,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_round_trip() {
        for category in ExpenseCategory::ALL {
            let parsed: ExpenseCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[rstest]
    #[case("Unknown")]
    #[case("food")]
    #[case("")]
    fn test_unknown_category_rejected(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<ExpenseCategory>(),
            Err(ExpenseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            validate_amount(dec!(-1)),
            Err(ExpenseError::NegativeAmount)
        );
        assert_eq!(validate_amount(Decimal::ZERO), Ok(()));
        assert_eq!(validate_amount(dec!(19.99)), Ok(()));
    }

    #[test]
    fn test_future_date_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let tomorrow = today.succ_opt().unwrap();

        assert_eq!(validate_date(tomorrow, today), Err(ExpenseError::FutureDate));
        assert_eq!(validate_date(today, today), Ok(()));
        assert_eq!(validate_date(today.pred_opt().unwrap(), today), Ok(()));
    }

    #[rstest]
    #[case(dec!(100), None, false)]
    #[case(dec!(100), Some(dec!(500)), false)]
    #[case(dec!(500), Some(dec!(500)), false)]
    #[case(dec!(500.01), Some(dec!(500)), true)]
    fn test_net_income_guard(
        #[case] amount: Decimal,
        #[case] income: Option<Decimal>,
        #[case] expected: bool,
    ) {
        assert_eq!(exceeds_net_income(amount, income), expected);
    }
}
