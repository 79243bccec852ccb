//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_ledger, resolve_as_of, print_json)
//! - `forecast` - Forecast commands (predict, analyze)
//! - `reports` - Report commands (summary, trend, breakdown)
//! - `export` - Export and category catalogue commands

pub mod core;
pub mod export;
pub mod forecast;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use export::*;
pub use forecast::*;
pub use reports::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
