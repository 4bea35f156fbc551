//! Chart aggregation for the expense listing.
//!
//! The `/expenses` endpoint can overlay one of three chart series on top of
//! the paginated listing. All three are plain folds over the caller's
//! expense rows, recomputed per request:
//!
//! - **bar**: one `(category, amount, week)` tuple per expense, all history
//! - **line**: per-category amounts summed over expenses created today
//! - **pie**: per-category share of today's total, as a percentage

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::expense::ExpenseCategory;

/// Chart mode selected by the `chart_type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    /// Per-expense bars bucketed by ISO week.
    Bar,
    /// Per-category daily totals (today only).
    Line,
    /// Per-category share of today's spend.
    Pie,
}

/// Error for an unknown `chart_type` value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("chart_type must be one of bar, line, pie")]
pub struct UnknownChartType;

impl std::str::FromStr for ChartType {
    type Err = UnknownChartType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "pie" => Ok(Self::Pie),
            _ => Err(UnknownChartType),
        }
    }
}

/// One expense row as seen by the aggregation: its category, amount, and the
/// calendar date it was recorded (from `created_at`).
#[derive(Debug, Clone, Copy)]
pub struct ExpenseFact {
    /// Expense category.
    pub category: ExpenseCategory,
    /// Expense amount.
    pub amount: Decimal,
    /// Calendar date the row was created.
    pub recorded_on: NaiveDate,
}

/// Bar chart point: one per expense over all history.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BarPoint {
    /// Category name.
    pub category: ExpenseCategory,
    /// Expense amount.
    pub amount: Decimal,
    /// ISO week number of the recording date.
    pub week: u32,
}

/// Line chart point: per-category total for a single day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinePoint {
    /// Category name.
    pub category: ExpenseCategory,
    /// The day being summed.
    pub date: NaiveDate,
    /// Summed amount for the category on that day.
    pub total_amount: Decimal,
}

/// Pie chart slice: a category's share of today's total.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PiePoint {
    /// Category name.
    pub category: ExpenseCategory,
    /// Share of today's total, rounded to 2 decimals.
    pub percentage: Decimal,
}

/// A computed chart series, serialized as a bare array of points.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Chart {
    /// Bar series.
    Bar(Vec<BarPoint>),
    /// Line series.
    Line(Vec<LinePoint>),
    /// Pie series.
    Pie(Vec<PiePoint>),
}

/// Builds the requested chart series from the user's expense rows.
#[must_use]
pub fn build_chart(chart_type: ChartType, facts: &[ExpenseFact], today: NaiveDate) -> Chart {
    match chart_type {
        ChartType::Bar => Chart::Bar(bar_series(facts)),
        ChartType::Line => Chart::Line(line_series(facts, today)),
        ChartType::Pie => Chart::Pie(pie_series(facts, today)),
    }
}

/// One point per expense, bucketed by the ISO week of its recording date.
/// No date filter: the series spans all history.
fn bar_series(facts: &[ExpenseFact]) -> Vec<BarPoint> {
    facts
        .iter()
        .map(|f| BarPoint {
            category: f.category,
            amount: f.amount,
            week: f.recorded_on.iso_week().week(),
        })
        .collect()
}

/// Per-category sums over expenses recorded today.
fn line_series(facts: &[ExpenseFact], today: NaiveDate) -> Vec<LinePoint> {
    let totals = category_totals(facts, today);

    totals
        .into_iter()
        .map(|(category, total_amount)| LinePoint {
            category,
            date: today,
            total_amount,
        })
        .collect()
}

/// Per-category share of today's total. Empty when nothing was recorded
/// today (or today's total sums to zero).
fn pie_series(facts: &[ExpenseFact], today: NaiveDate) -> Vec<PiePoint> {
    let totals = category_totals(facts, today);
    let grand_total: Decimal = totals.values().copied().sum();

    if grand_total.is_zero() {
        return Vec::new();
    }

    totals
        .into_iter()
        .map(|(category, total)| PiePoint {
            category,
            percentage: (total / grand_total * Decimal::ONE_HUNDRED).round_dp(2),
        })
        .collect()
}

fn category_totals(
    facts: &[ExpenseFact],
    day: NaiveDate,
) -> BTreeMap<ExpenseCategory, Decimal> {
    let mut totals = BTreeMap::new();
    for fact in facts.iter().filter(|f| f.recorded_on == day) {
        *totals.entry(fact.category).or_insert(Decimal::ZERO) += fact.amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fact(category: ExpenseCategory, amount: Decimal, recorded_on: NaiveDate) -> ExpenseFact {
        ExpenseFact {
            category,
            amount,
            recorded_on,
        }
    }

    #[test]
    fn test_chart_type_parsing() {
        assert_eq!("bar".parse::<ChartType>(), Ok(ChartType::Bar));
        assert_eq!("line".parse::<ChartType>(), Ok(ChartType::Line));
        assert_eq!("pie".parse::<ChartType>(), Ok(ChartType::Pie));
        assert_eq!("donut".parse::<ChartType>(), Err(UnknownChartType));
        assert_eq!("Bar".parse::<ChartType>(), Err(UnknownChartType));
    }

    #[test]
    fn test_bar_series_spans_all_history() {
        let facts = [
            fact(ExpenseCategory::Food, dec!(10), day(2026, 1, 5)),
            fact(ExpenseCategory::Food, dec!(20), day(2026, 3, 2)),
            fact(ExpenseCategory::Health, dec!(5), day(2026, 3, 3)),
        ];

        let Chart::Bar(points) = build_chart(ChartType::Bar, &facts, day(2026, 3, 3)) else {
            panic!("expected bar series");
        };

        // One point per expense; weeks come from the ISO calendar.
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].week, day(2026, 1, 5).iso_week().week());
        assert_eq!(points[1].week, day(2026, 3, 2).iso_week().week());
        assert_eq!(points[2].amount, dec!(5));
    }

    #[test]
    fn test_line_series_sums_today_per_category() {
        let today = day(2026, 3, 3);
        let facts = [
            fact(ExpenseCategory::Food, dec!(10), today),
            fact(ExpenseCategory::Food, dec!(15), today),
            fact(ExpenseCategory::Transport, dec!(7), today),
            // Yesterday's row must not contribute.
            fact(ExpenseCategory::Food, dec!(99), day(2026, 3, 2)),
        ];

        let Chart::Line(points) = build_chart(ChartType::Line, &facts, today) else {
            panic!("expected line series");
        };

        assert_eq!(
            points,
            vec![
                LinePoint {
                    category: ExpenseCategory::Food,
                    date: today,
                    total_amount: dec!(25),
                },
                LinePoint {
                    category: ExpenseCategory::Transport,
                    date: today,
                    total_amount: dec!(7),
                },
            ]
        );
    }

    #[test]
    fn test_pie_even_split_is_fifty_fifty() {
        let today = day(2026, 3, 3);
        let facts = [
            fact(ExpenseCategory::Food, dec!(50), today),
            fact(ExpenseCategory::Transport, dec!(50), today),
        ];

        let Chart::Pie(points) = build_chart(ChartType::Pie, &facts, today) else {
            panic!("expected pie series");
        };

        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.percentage == dec!(50.00)));
    }

    #[test]
    fn test_pie_percentages_round_to_two_decimals() {
        let today = day(2026, 3, 3);
        let facts = [
            fact(ExpenseCategory::Food, dec!(1), today),
            fact(ExpenseCategory::Health, dec!(1), today),
            fact(ExpenseCategory::Transport, dec!(1), today),
        ];

        let Chart::Pie(points) = build_chart(ChartType::Pie, &facts, today) else {
            panic!("expected pie series");
        };

        assert!(points.iter().all(|p| p.percentage == dec!(33.33)));
    }

    #[test]
    fn test_pie_empty_when_nothing_recorded_today() {
        let today = day(2026, 3, 3);
        let facts = [fact(ExpenseCategory::Food, dec!(50), day(2026, 3, 2))];

        let Chart::Pie(points) = build_chart(ChartType::Pie, &facts, today) else {
            panic!("expected pie series");
        };

        assert!(points.is_empty());
    }
}
