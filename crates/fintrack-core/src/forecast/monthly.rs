//! Calendar month windows and per-category monthly totals

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::Transaction;

/// Category -> monthly expense totals, oldest month first
pub type MonthlyBuckets = BTreeMap<String, Vec<f64>>;

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Move by whole calendar months, clamping the day to the target month's end
///
/// March 31 minus one month is February 28 (or 29), never a day in March.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    }
}

/// Inclusive first and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = month_start(date);
    let end = shift_months(start, 1) - Duration::days(1);
    (start, end)
}

/// Whole calendar months from `date` forward to `reference` (negative if `date` is later)
pub fn months_between(date: NaiveDate, reference: NaiveDate) -> i64 {
    let index = |d: NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month0());
    index(reference) - index(date)
}

/// Sum of expense amounts dated within the inclusive range
pub fn expense_total(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_range(start, end))
        .map(|t| t.amount)
        .sum()
}

/// Group expense totals by category for the `months` calendar months ending at `today`
///
/// Each category maps to exactly `months` totals, oldest first; the last slot is
/// the month containing `today`. Categories that only ever total zero are dropped.
pub fn monthly_spending(
    transactions: &[Transaction],
    today: NaiveDate,
    months: usize,
) -> MonthlyBuckets {
    let mut buckets = MonthlyBuckets::new();
    if months == 0 {
        return buckets;
    }

    for tx in transactions.iter().filter(|t| t.is_expense()) {
        let age = months_between(tx.date, today);
        if age < 0 || age >= months as i64 {
            continue;
        }
        let slot = months - 1 - age as usize;

        buckets
            .entry(tx.category.clone())
            .or_insert_with(|| vec![0.0; months])[slot] += tx.amount;
    }

    buckets.retain(|_, totals| totals.iter().any(|v| *v != 0.0));

    tracing::debug!(
        categories = buckets.len(),
        months,
        through = %today.format("%Y-%m"),
        "Aggregated monthly spending"
    );

    buckets
}
