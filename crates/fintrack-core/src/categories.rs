//! Built-in category catalogue
//!
//! Transactions may use any label; these are the ones offered by default,
//! each with a display icon.

use crate::models::TransactionType;

/// Icon shown for labels without one of their own
pub const DEFAULT_ICON: &str = "📋";

/// Default expense categories with icons
pub const EXPENSE_CATEGORIES: &[(&str, &str)] = &[
    ("Food & Dining", "🍽️"),
    ("Transportation", "🚗"),
    ("Shopping", "🛍️"),
    ("Entertainment", "🎬"),
    ("Bills & Utilities", "💡"),
    ("Healthcare", "🏥"),
    ("Education", "📚"),
    ("Travel", "✈️"),
    ("Groceries", "🛒"),
    ("Rent", "🏠"),
    ("Insurance", "🛡️"),
    ("Investment", "📈"),
    ("Other", "📋"),
];

/// Default income categories with icons
pub const INCOME_CATEGORIES: &[(&str, &str)] = &[
    ("Salary", "💼"),
    ("Interest from Mutual Funds", "📊"),
    ("Interest from Fixed Deposits", "🏦"),
    ("Interest from Savings Account", "💰"),
    ("Dividend from Stocks", "📈"),
    ("Freelance Income", "💻"),
    ("Business Income", "🏢"),
    ("Rental Income", "🏘️"),
    ("Bonus", "🎉"),
    ("Gift Money", "🎁"),
    ("Refund", "↩️"),
    ("Other Income", "💵"),
];

/// Category names offered for a transaction type
pub fn categories_for(kind: TransactionType) -> Vec<&'static str> {
    let table = match kind {
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Income => INCOME_CATEGORIES,
    };
    table.iter().map(|(name, _)| *name).collect()
}

/// Display icon for a category label (exact match)
pub fn category_icon(category: &str) -> &'static str {
    EXPENSE_CATEGORIES
        .iter()
        .chain(INCOME_CATEGORIES)
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// True if the label is one of the built-in categories for this type
pub fn is_known_category(category: &str, kind: TransactionType) -> bool {
    categories_for(kind).contains(&category)
}
