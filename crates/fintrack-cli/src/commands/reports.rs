//! Report command implementations

use anyhow::Result;
use fintrack_core::categories::category_icon;
use fintrack_core::export::format_currency;
use fintrack_core::reports;

use super::{print_json, truncate, Ledger};

/// Width of the trend bar chart in characters
const BAR_WIDTH: usize = 30;

pub fn cmd_summary(ledger: &Ledger, json: bool) -> Result<()> {
    let summary = reports::monthly_summary(&ledger.transactions, ledger.today);

    if json {
        return print_json(&summary);
    }

    println!();
    println!("📊 Monthly Summary");
    println!("   Month: {}", summary.month.format("%B %Y"));
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Income:       {:>12}", format_currency(summary.income));
    println!("   Expenses:     {:>12}", format_currency(summary.expenses));
    println!("   Balance:      {:>12}", format_currency(summary.balance));
    println!("   Savings rate: {:>11.1}%", summary.savings_rate);

    Ok(())
}

pub fn cmd_trend(ledger: &Ledger, months: usize, json: bool) -> Result<()> {
    let totals = reports::monthly_expense_trend(&ledger.transactions, ledger.today, months);

    if json {
        return print_json(&totals);
    }

    println!();
    println!("📈 Expense Trend (last {} months)", months);
    println!("   ─────────────────────────────────────────────────────────────");

    let max = totals.iter().map(|m| m.amount).fold(0.0_f64, f64::max);

    for month in &totals {
        let bar_len = if max > 0.0 {
            ((month.amount / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "   {:8} │ {:>12} │ {}",
            month.label,
            format_currency(month.amount),
            "█".repeat(bar_len)
        );
    }

    Ok(())
}

pub fn cmd_breakdown(ledger: &Ledger, limit: usize, json: bool) -> Result<()> {
    let breakdown = reports::category_breakdown(&ledger.transactions, ledger.today, limit);

    if json {
        return print_json(&breakdown);
    }

    println!();
    println!("🧾 Category Breakdown");
    println!("   Month: {}", ledger.today.format("%B %Y"));
    println!("   ─────────────────────────────────────────────────────────────");

    if breakdown.is_empty() {
        println!("   No expenses found this month.");
        return Ok(());
    }

    println!(
        "   {:25} │ {:>12} │ {:>6} │ {:>5}",
        "Category", "Amount", "%", "Count"
    );
    println!("   ──────────────────────────┼──────────────┼────────┼───────");

    for cat in &breakdown {
        println!(
            "   {} {:22} │ {:>12} │ {:>5.1}% │ {:>5}",
            category_icon(&cat.category),
            truncate(&cat.category, 22),
            format_currency(cat.amount),
            cat.percentage,
            cat.count
        );
    }

    Ok(())
}
