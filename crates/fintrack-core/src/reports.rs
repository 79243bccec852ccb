//! Spending reports over a transaction snapshot
//!
//! - Monthly summary (income, expenses, balance, savings rate)
//! - Expense totals per month for the trailing months
//! - Category breakdown of a month's expenses

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::forecast::monthly::{expense_total, month_bounds, shift_months};
use crate::models::{CategoryData, MonthlySummary, MonthlyTotal, Transaction};

/// Default number of categories in a breakdown
pub const DEFAULT_BREAKDOWN_LIMIT: usize = 8;

/// Income, expenses and savings for the month containing `today`
pub fn monthly_summary(transactions: &[Transaction], today: NaiveDate) -> MonthlySummary {
    let (start, end) = month_bounds(today);

    let income: f64 = transactions
        .iter()
        .filter(|t| t.is_income() && t.in_range(start, end))
        .map(|t| t.amount)
        .sum();
    let expenses = expense_total(transactions, start, end);

    let savings_rate = if income > 0.0 {
        (income - expenses) * 100.0 / income
    } else {
        0.0
    };

    MonthlySummary {
        month: start,
        income,
        expenses,
        balance: income - expenses,
        savings_rate,
    }
}

/// Expense totals for the `months` calendar months ending with the month of `today`
///
/// Oldest month first; months without expenses report 0.
pub fn monthly_expense_trend(
    transactions: &[Transaction],
    today: NaiveDate,
    months: usize,
) -> Vec<MonthlyTotal> {
    (0..months)
        .rev()
        .map(|offset| {
            let (start, end) = month_bounds(shift_months(today, -(offset as i32)));
            MonthlyTotal::new(start, expense_total(transactions, start, end))
        })
        .collect()
}

/// Largest expense categories in the month containing `today`
///
/// Percentages are of the month's total expenses. Sorted by amount, largest
/// first, then by name; at most `limit` entries.
pub fn category_breakdown(
    transactions: &[Transaction],
    today: NaiveDate,
    limit: usize,
) -> Vec<CategoryData> {
    let (start, end) = month_bounds(today);

    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_range(start, end))
    {
        let entry = totals.entry(tx.category.as_str()).or_insert((0.0, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    let month_total: f64 = totals.values().map(|(amount, _)| amount).sum();

    let mut breakdown: Vec<CategoryData> = totals
        .into_iter()
        .map(|(category, (amount, count))| CategoryData {
            category: category.to_string(),
            amount,
            count,
            percentage: if month_total > 0.0 {
                amount * 100.0 / month_total
            } else {
                0.0
            },
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown.truncate(limit);

    breakdown
}
