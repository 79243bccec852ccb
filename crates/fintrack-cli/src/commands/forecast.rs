//! Forecast command implementations

use anyhow::Result;
use fintrack_core::categories::category_icon;
use fintrack_core::export::format_currency;
use fintrack_core::Trend;

use super::{print_json, truncate, Ledger};

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Increasing => "↑ increasing",
        Trend::Decreasing => "↓ decreasing",
        Trend::Stable => "→ stable",
    }
}

pub fn cmd_predict(ledger: &Ledger, json: bool) -> Result<()> {
    let predictions = ledger.forecaster().predict_next_month_expenses();

    if json {
        return print_json(&predictions);
    }

    println!();
    println!("🔮 Next Month Forecast");
    println!("   Based on spending up to {}", ledger.today);
    println!("   ─────────────────────────────────────────────────────────────");

    if predictions.is_empty() {
        println!("   No expenses found in the last {} months.", ledger.config.window_months);
        return Ok(());
    }

    let total: u64 = predictions.iter().map(|p| p.predicted_amount).sum();
    println!("   Total: {}", format_currency(total as f64));
    println!();
    println!(
        "   {:25} │ {:>12} │ {:>10} │ {:14}",
        "Category", "Predicted", "Confidence", "Trend"
    );
    println!("   ──────────────────────────┼──────────────┼────────────┼───────────────");

    for prediction in &predictions {
        println!(
            "   {} {:22} │ {:>12} │ {:>9.0}% │ {:14}",
            category_icon(&prediction.category),
            truncate(&prediction.category, 22),
            format_currency(prediction.predicted_amount as f64),
            prediction.confidence * 100.0,
            trend_marker(prediction.trend)
        );
    }

    Ok(())
}

pub fn cmd_analyze(ledger: &Ledger, json: bool) -> Result<()> {
    let analysis = ledger.forecaster().analyze_spending_patterns();

    if json {
        return print_json(&analysis);
    }

    println!();
    println!("📈 Spending Analysis");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   This month: {:>12}",
        format_currency(analysis.current_month_expenses)
    );
    println!(
        "   Last month: {:>12}",
        format_currency(analysis.last_month_expenses)
    );
    println!("   Change:     {:>+11.2}%", analysis.change_percent);
    println!("   Trend:      {}", trend_marker(analysis.trend));

    match analysis.trend {
        Trend::Increasing => println!("\n   ⚠️  Spending is up compared to last month."),
        Trend::Decreasing => println!("\n   ✅ Spending is down compared to last month."),
        Trend::Stable => {}
    }

    Ok(())
}
