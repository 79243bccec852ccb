//! Transaction CSV export and amount formatting
//!
//! The CSV layout is the same one `import::parse_csv` reads back.

use chrono::NaiveDate;

use crate::models::Transaction;

/// Header row of exported CSV files
pub const CSV_HEADER: &str = "Date,Type,Category,Description,Amount (₹)";

/// Export transactions to CSV
///
/// Descriptions are always quoted; other fields only when they need it.
pub fn export_transactions_csv(transactions: &[Transaction]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for tx in transactions {
        csv.push_str(&format!(
            "{},{},{},\"{}\",{}\n",
            tx.date.format("%Y-%m-%d"),
            tx.kind,
            escape_csv_field(&tx.category),
            tx.description.replace('"', "\"\""),
            tx.amount
        ));
    }

    csv
}

/// Default export file name, e.g. `transactions_2026-10-16.csv`
pub fn default_export_filename(today: NaiveDate) -> String {
    format!("transactions_{}.csv", today.format("%Y-%m-%d"))
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Format whole rupees with Indian digit grouping, e.g. `₹1,23,457`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&format!("{:.0}", rounded.abs())))
}

/// Format a number with Indian digit grouping and up to three decimals
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = format!("{}{}", sign, group_indian(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Group a string of digits as 12,34,56,789
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_csv;
    use crate::models::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv_field("with\nnewline"), "\"with\nnewline\"");
        assert_eq!(escape_csv_field("with\rreturn"), "\"with\rreturn\"");
    }

    #[test]
    fn test_export_transactions_csv() {
        let transactions = vec![
            Transaction::new("a", 15000.0, "Rent", date(2026, 10, 3), TransactionType::Expense)
                .with_description("Flat \"4B\""),
            Transaction::new(
                "b",
                250.5,
                "Food & Dining",
                date(2026, 10, 4),
                TransactionType::Expense,
            ),
        ];

        let csv = export_transactions_csv(&transactions);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "2026-10-03,expense,Rent,\"Flat \"\"4B\"\"\",15000");
        assert_eq!(lines[2], "2026-10-04,expense,Food & Dining,\"\",250.5");
    }

    #[test]
    fn test_export_reads_back() {
        let transactions = vec![Transaction::new(
            "a",
            99.0,
            "Travel, Local",
            date(2026, 1, 2),
            TransactionType::Expense,
        )
        .with_description("Metro card")];

        let parsed = parse_csv(export_transactions_csv(&transactions).as_bytes()).unwrap();
        assert_eq!(parsed[0].category, "Travel, Local");
        assert_eq!(parsed[0].description, "Metro card");
        assert_eq!(parsed[0].amount, 99.0);
    }

    #[test]
    fn test_export_reads_back_carriage_return() {
        let transactions = vec![Transaction::new(
            "a",
            10.0,
            "Bills\rUtilities",
            date(2026, 1, 2),
            TransactionType::Expense,
        )];

        let parsed = parse_csv(export_transactions_csv(&transactions).as_bytes()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].category, "Bills\rUtilities");
    }

    #[test]
    fn test_export_empty() {
        assert_eq!(export_transactions_csv(&[]), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_default_export_filename() {
        assert_eq!(
            default_export_filename(date(2026, 10, 16)),
            "transactions_2026-10-16.csv"
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.4), "₹999");
        assert_eq!(format_currency(1000.0), "₹1,000");
        assert_eq!(format_currency(123456.7), "₹1,23,457");
        assert_eq!(format_currency(12345678.0), "₹1,23,45,678");
        assert_eq!(format_currency(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1234567.891), "12,34,567.891");
        assert_eq!(format_number(1500.5), "1,500.5");
        assert_eq!(format_number(-100000.0), "-1,00,000");
    }
}
