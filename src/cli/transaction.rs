//! Transaction CLI commands
//!
//! One-shot equivalents of the interactive menu entries.

use clap::Subcommand;

use crate::display::{format_history, format_money, format_summary, DisplayOptions};
use crate::error::{FlowError, FlowResult};
use crate::models::TransactionKind;
use crate::services::{AddOutcome, Ledger};
use crate::shell::parse_amount;

/// Ledger subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum LedgerCommands {
    /// Record income
    Income {
        /// Description (e.g., "Salary")
        name: String,
        /// Positive amount (e.g., "2500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Record an expense
    Expense {
        /// Description (e.g., "Groceries")
        name: String,
        /// Positive amount (e.g., "42.10")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show total income, total expense and balance
    Summary,
    /// Show every transaction, newest first
    History,
}

/// Handle a ledger command, returning the text to print
pub fn handle_ledger_command(
    ledger: &mut Ledger,
    options: &DisplayOptions,
    cmd: LedgerCommands,
) -> FlowResult<String> {
    match cmd {
        LedgerCommands::Income { name, amount } => {
            add(ledger, TransactionKind::Income, &name, &amount, options)
        }
        LedgerCommands::Expense { name, amount } => {
            add(ledger, TransactionKind::Expense, &name, &amount, options)
        }
        LedgerCommands::Summary => Ok(format_summary(&ledger.summary(), options)),
        LedgerCommands::History => Ok(format_history(&ledger.history(), options)),
    }
}

fn add(
    ledger: &mut Ledger,
    kind: TransactionKind,
    name: &str,
    amount: &str,
    options: &DisplayOptions,
) -> FlowResult<String> {
    let value = parse_amount(amount)
        .ok_or_else(|| FlowError::Validation(format!("Invalid amount: {}", amount)))?;

    let AddOutcome {
        transaction,
        save_error,
    } = ledger.add(kind, name, value)?;

    // The command exists only to change the file, so a failed save is fatal here
    if let Some(e) = save_error {
        return Err(e);
    }

    Ok(format!(
        "Added {} '{}': {}\n",
        transaction.kind,
        transaction.name,
        format_money(transaction.amount, &options.currency_symbol)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedClock;
    use crate::storage::RecordStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ledger_in(temp_dir: &TempDir) -> Ledger {
        let store = RecordStore::new(temp_dir.path().join("transactions.csv"));
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 5, 9).unwrap());
        Ledger::open_with_clock(store, Box::new(clock)).0
    }

    #[test]
    fn test_income_command() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&temp_dir);

        let out = handle_ledger_command(
            &mut ledger,
            &DisplayOptions::plain(),
            LedgerCommands::Income {
                name: "Salary".into(),
                amount: "1500".into(),
            },
        )
        .unwrap();

        assert_eq!(out, "Added income 'Salary': $1,500.00\n");
        assert_eq!(ledger.calculate_balance(), 1500.0);
    }

    #[test]
    fn test_expense_command_rejects_bad_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&temp_dir);

        for amount in ["-5", "0", "ten"] {
            let err = handle_ledger_command(
                &mut ledger,
                &DisplayOptions::plain(),
                LedgerCommands::Expense {
                    name: "Lunch".into(),
                    amount: amount.into(),
                },
            )
            .unwrap_err();
            assert!(err.is_validation());
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_history_command_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&temp_dir);

        let out =
            handle_ledger_command(&mut ledger, &DisplayOptions::plain(), LedgerCommands::History)
                .unwrap();
        assert_eq!(out, "No transactions recorded yet.\n");
    }
}
