//! Report formatting utilities for terminal output
//!
//! Shared helpers: currency formatting, sign and color hints, separators.

use crate::config::Settings;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Presentation preferences for rendered reports
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            color: true,
        }
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            color: settings.color,
        }
    }
}

impl DisplayOptions {
    /// Plain output without escape codes
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Wrap `text` in green (non-negative) or red (negative) when colors are on
    pub fn paint(&self, text: &str, non_negative: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let color = if non_negative { GREEN } else { RED };
        format!("{}{}{}", color, text, RESET)
    }
}

/// Format the magnitude of `amount` as currency, e.g. `$1,234.50`
///
/// The sign is dropped; callers decide how to show it.
pub fn format_money(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{}.{}", symbol, group_thousands(whole), fraction)
}

/// `1234567` -> `1,234,567`
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `+` for non-negative values, `-` otherwise
pub fn sign_char(non_negative: bool) -> char {
    if non_negative {
        '+'
    } else {
        '-'
    }
}

/// Format a separator line
pub fn separator(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}
