//! Transaction history formatting

use crate::services::HistoryEntry;

use super::report::{format_header, format_money, separator, sign_char, DisplayOptions};

const WIDTH: usize = 50;

/// Message shown instead of an empty history
pub const NO_TRANSACTIONS: &str = "No transactions recorded yet.";

/// Format a single history line
///
/// `01. [2025-01-15] Groceries                 | EXPENSE | -$50.00`
pub fn format_history_row(entry: &HistoryEntry<'_>, options: &DisplayOptions) -> String {
    let txn = entry.transaction;
    let non_negative = txn.is_inflow();
    let amount = format!(
        "{}{:<10}",
        sign_char(non_negative),
        format_money(txn.amount, &options.currency_symbol)
    );

    format!(
        "{:02}. [{}] {:<25} | {:<7} | {}",
        entry.index,
        txn.date.format("%Y-%m-%d"),
        txn.name,
        txn.kind.as_str().to_uppercase(),
        options.paint(&amount, non_negative)
    )
}

/// Format the full history, or the empty-history message
pub fn format_history(entries: &[HistoryEntry<'_>], options: &DisplayOptions) -> String {
    if entries.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let mut output = String::new();
    output.push_str(&separator('#', WIDTH));
    output.push('\n');
    output.push_str(&format_header("TRANSACTION HISTORY", WIDTH));
    output.push('\n');
    output.push_str(&separator('#', WIDTH));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_history_row(entry, options));
        output.push('\n');
    }

    output.push_str(&separator('#', WIDTH));
    output.push('\n');
    output
}
