//! Interactive menu loop
//!
//! Drives the ledger from a numbered menu until the user exits or the input
//! runs out. Invalid input is reported and re-prompted; nothing in here ends
//! the session early except an output failure.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::display::{format_history, format_summary, DisplayOptions};
use crate::error::FlowResult;
use crate::models::TransactionKind;
use crate::services::Ledger;
use crate::storage::LoadOutcome;

use super::prompt::Prompter;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ViewSummary,
    ViewHistory,
    Exit,
}

impl MenuChoice {
    /// Parse the user's menu answer (`"1"`..`"5"`)
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Self::AddIncome),
            "2" => Some(Self::AddExpense),
            "3" => Some(Self::ViewSummary),
            "4" => Some(Self::ViewHistory),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Human-readable description of a load outcome
pub fn describe_load(path: &Path, outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::Missing => format!(
            "[{}] not found. Starting with an empty budget.",
            path.display()
        ),
        LoadOutcome::Loaded { count, skipped: 0 } => {
            format!("Successfully loaded {} transactions.", count)
        }
        LoadOutcome::Loaded { count, skipped } => format!(
            "Successfully loaded {} transactions ({} malformed rows skipped).",
            count, skipped
        ),
        LoadOutcome::Failed(e) => format!("Error loading data from {}: {}", path.display(), e),
    }
}

/// The interactive shell
pub struct Shell<R, W> {
    prompter: Prompter<R, W>,
    options: DisplayOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, options: DisplayOptions) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            options,
        }
    }

    /// Print how the ledger was loaded
    pub fn report_load(&mut self, path: &Path, outcome: &LoadOutcome) -> FlowResult<()> {
        self.prompter.say(&describe_load(path, outcome))
    }

    /// Run the menu loop until exit or end of input
    pub fn run(&mut self, ledger: &mut Ledger) -> FlowResult<()> {
        loop {
            self.print_menu()?;

            let Some(answer) = self.prompter.prompt_string("Enter your choice (1-5): ")? else {
                debug!("Input closed, leaving menu");
                return self.say_goodbye();
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::AddIncome) => {
                    if !self.add_flow(ledger, TransactionKind::Income)? {
                        return self.say_goodbye();
                    }
                }
                Some(MenuChoice::AddExpense) => {
                    if !self.add_flow(ledger, TransactionKind::Expense)? {
                        return self.say_goodbye();
                    }
                }
                Some(MenuChoice::ViewSummary) => {
                    let text = format_summary(&ledger.summary(), &self.options);
                    self.prompter.say("")?;
                    self.prompter.say_raw(&text)?;
                }
                Some(MenuChoice::ViewHistory) => {
                    let text = format_history(&ledger.history(), &self.options);
                    self.prompter.say("")?;
                    self.prompter.say_raw(&text)?;
                }
                Some(MenuChoice::Exit) => return self.say_goodbye(),
                None => self
                    .prompter
                    .say("Invalid choice. Please enter a number between 1 and 5.")?,
            }
        }
    }

    /// Give back the output sink (used by tests)
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn print_menu(&mut self) -> FlowResult<()> {
        self.prompter.say("")?;
        self.prompter.say("--- Budget Tracker Menu ---")?;
        self.prompter.say("1. Add Income")?;
        self.prompter.say("2. Add Expense")?;
        self.prompter.say("3. View Summary (Balance, Total Income/Expense)")?;
        self.prompter.say("4. View Detailed Transaction History")?;
        self.prompter.say("5. Exit")
    }

    /// Collect a description and amount, then record it
    ///
    /// Returns `false` if the input ran out mid-way.
    fn add_flow(&mut self, ledger: &mut Ledger, kind: TransactionKind) -> FlowResult<bool> {
        let (title, example) = match kind {
            TransactionKind::Income => ("INCOME", "Salary, Gift"),
            TransactionKind::Expense => ("EXPENSE", "Groceries, Rent"),
        };

        self.prompter.say("")?;
        self.prompter.say(&format!("--- ADD {} ---", title))?;

        let Some(name) = self
            .prompter
            .prompt_string(&format!("Enter {} description (e.g., {}): ", kind, example))?
        else {
            return Ok(false);
        };
        let Some(amount) = self
            .prompter
            .prompt_amount(&format!("Enter {} amount: ", kind))?
        else {
            return Ok(false);
        };

        match ledger.add(kind, &name, amount) {
            Ok(outcome) => {
                match &outcome.save_error {
                    None => self.prompter.say("Data saved successfully.")?,
                    Some(e) => self.prompter.say(&format!("Error saving data: {}", e))?,
                }
                self.prompter.say("")?;
                self.prompter
                    .say(&format!("--- {} added successfully! ---", title))?;
            }
            Err(e) => self.prompter.say(&format!("Error: {}", e))?,
        }

        Ok(true)
    }

    fn say_goodbye(&mut self) -> FlowResult<()> {
        self.prompter.say("Thank you for using FinanceFlow! Goodbye.")
    }
}
