//! Summary display formatting

use crate::services::Summary;

use super::report::{format_header, format_money, separator, sign_char, DisplayOptions};

const WIDTH: usize = 40;

/// Format total income, total expense and the signed balance
pub fn format_summary(summary: &Summary, options: &DisplayOptions) -> String {
    let symbol = &options.currency_symbol;
    let non_negative = summary.is_non_negative();
    let balance = format!(
        "{}{}",
        sign_char(non_negative),
        format_money(summary.balance, symbol)
    );

    let mut output = String::new();
    output.push_str(&separator('=', WIDTH));
    output.push('\n');
    output.push_str(&format_header("FINANCE FLOW SUMMARY", WIDTH));
    output.push('\n');
    output.push_str(&separator('=', WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:  {}\n",
        format_money(summary.income, symbol)
    ));
    output.push_str(&format!(
        "Total Expense: {}\n",
        format_money(summary.expense, symbol)
    ));
    output.push_str(&separator('-', WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Current Balance: {}\n",
        options.paint(&balance, non_negative)
    ));
    output.push_str(&separator('=', WIDTH));
    output.push('\n');

    output
}
