//! Ledger service
//!
//! Owns the in-memory list of transactions together with the store it was
//! loaded from. Every successful add rewrites the whole file.

use std::path::Path;

use tracing::{error, info};

use crate::error::{FlowError, FlowResult};
use crate::models::{Transaction, TransactionKind};
use crate::storage::{LoadOutcome, RecordStore};

use super::clock::{Clock, SystemClock};

/// Result of a successful add
#[derive(Debug)]
pub struct AddOutcome {
    /// The transaction as stored (signed amount, trimmed name)
    pub transaction: Transaction,
    /// Set when the transaction was kept in memory but the file rewrite failed
    pub save_error: Option<FlowError>,
}

impl AddOutcome {
    /// Check if the ledger file was rewritten
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Income, expense and net balance over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Sum of all positive amounts
    pub income: f64,
    /// Absolute value of the sum of all negative amounts
    pub expense: f64,
    /// Sum of all amounts
    pub balance: f64,
}

impl Summary {
    /// Sign indicator for the balance
    pub fn is_non_negative(&self) -> bool {
        self.balance >= 0.0
    }
}

/// One line of the transaction history
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry<'a> {
    /// 1-based position in the sorted history
    pub index: usize,
    pub transaction: &'a Transaction,
}

/// The ledger: every recorded transaction, in entry order
pub struct Ledger {
    store: RecordStore,
    transactions: Vec<Transaction>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Load the ledger from `store` using the system clock
    pub fn open(store: RecordStore) -> (Self, LoadOutcome) {
        Self::open_with_clock(store, Box::new(SystemClock))
    }

    /// Load the ledger from `store`, stamping new entries with `clock`
    pub fn open_with_clock(store: RecordStore, clock: Box<dyn Clock>) -> (Self, LoadOutcome) {
        let report = store.load(clock.today());
        let ledger = Self {
            store,
            transactions: report.transactions,
            clock,
        };
        (ledger, report.outcome)
    }

    /// Path of the backing ledger file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// All transactions in entry order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Record a new transaction dated today and rewrite the ledger file
    ///
    /// `amount` is the positive magnitude; expenses are stored negated.
    /// Non-positive (or non-finite) amounts are rejected without touching the
    /// ledger or the file.
    pub fn add(&mut self, kind: TransactionKind, name: &str, amount: f64) -> FlowResult<AddOutcome> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(FlowError::non_positive_amount(amount));
        }

        let transaction = Transaction::new(self.clock.today(), kind, name, amount);
        self.transactions.push(transaction.clone());

        let save_error = match self.store.save(&self.transactions) {
            Ok(()) => {
                info!(kind = %transaction.kind, amount = transaction.amount, "Transaction added");
                None
            }
            Err(e) => {
                error!(path = %self.path().display(), error = %e, "Failed to save ledger");
                Some(e)
            }
        };

        Ok(AddOutcome {
            transaction,
            save_error,
        })
    }

    /// Like [`Ledger::add`], with the kind given as text (`"income"`, `"EXPENSE"`, ...)
    pub fn add_str(&mut self, kind: &str, name: &str, amount: f64) -> FlowResult<AddOutcome> {
        let kind: TransactionKind = kind.parse()?;
        self.add(kind, name, amount)
    }

    /// Net sum of every amount; zero for an empty ledger
    pub fn calculate_balance(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Total income, total expense and balance
    pub fn summary(&self) -> Summary {
        let income: f64 = self
            .transactions
            .iter()
            .filter(|t| t.is_inflow())
            .map(|t| t.amount)
            .sum();
        let expense: f64 = self
            .transactions
            .iter()
            .filter(|t| t.is_outflow())
            .map(|t| t.amount)
            .sum();

        Summary {
            income,
            expense: expense.abs(),
            balance: self.calculate_balance(),
        }
    }

    /// Transactions newest first, numbered from 1
    ///
    /// The sort is stable, so entries sharing a date keep their entry order.
    pub fn history(&self) -> Vec<HistoryEntry<'_>> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, transaction)| HistoryEntry {
                index: i + 1,
                transaction,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_at(temp_dir: &TempDir, today: NaiveDate) -> Ledger {
        let store = RecordStore::new(temp_dir.path().join("transactions.csv"));
        Ledger::open_with_clock(store, Box::new(FixedClock(today))).0
    }

    #[test]
    fn test_fresh_ledger_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("transactions.csv"));
        let (ledger, outcome) = Ledger::open(store);

        assert!(matches!(outcome, LoadOutcome::Missing));
        assert!(ledger.is_empty());
        assert_eq!(ledger.calculate_balance(), 0.0);
        assert_eq!(ledger.summary(), Summary::default());
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_add_applies_sign_and_saves() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_at(&temp_dir, date(2025, 3, 1));

        let income = ledger.add(TransactionKind::Income, " Salary ", 1000.0).unwrap();
        let expense = ledger.add(TransactionKind::Expense, "Rent", 400.0).unwrap();

        assert!(income.is_saved());
        assert!(expense.is_saved());
        assert_eq!(income.transaction.amount, 1000.0);
        assert_eq!(income.transaction.name, "Salary");
        assert_eq!(expense.transaction.amount, -400.0);
        assert_eq!(expense.transaction.date, date(2025, 3, 1));
        assert!(ledger.transactions().iter().all(Transaction::sign_matches_kind));

        let contents = fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_add_str_normalizes_kind() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_at(&temp_dir, date(2025, 3, 1));

        let outcome = ledger.add_str("EXPENSE", "Coffee", 4.5).unwrap();
        assert_eq!(outcome.transaction.kind, TransactionKind::Expense);
        assert_eq!(outcome.transaction.amount, -4.5);

        let err = ledger.add_str("gift", "Coffee", 4.5).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_non_positive_amounts_are_rejected_without_saving() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_at(&temp_dir, date(2025, 3, 1));

        assert!(ledger.add(TransactionKind::Expense, "x", 0.0).unwrap_err().is_validation());
        assert!(ledger.add(TransactionKind::Income, "x", -5.0).unwrap_err().is_validation());
        assert!(ledger.add(TransactionKind::Income, "x", f64::NAN).is_err());

        assert!(ledger.is_empty());
        assert!(!ledger.path().exists());
    }

    #[test]
    fn test_balance_is_additive() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_at(&temp_dir, date(2025, 3, 1));

        ledger.add(TransactionKind::Income, "Pay", 250.0).unwrap();
        let before = ledger.calculate_balance();
        let added = ledger.add(TransactionKind::Expense, "Food", 75.25).unwrap();

        assert_eq!(ledger.calculate_balance(), before + added.transaction.amount);
        let sum: f64 = ledger.transactions().iter().map(|t| t.amount).sum();
        assert_eq!(ledger.calculate_balance(), sum);
    }

    #[test]
    fn test_summary_totals() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_at(&temp_dir, date(2025, 3, 1));

        ledger.add(TransactionKind::Income, "Pay", 100.0).unwrap();
        ledger.add(TransactionKind::Income, "Gift", 50.0).unwrap();
        ledger.add(TransactionKind::Expense, "Rent", 200.0).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.income, 150.0);
        assert_eq!(summary.expense, 200.0);
        assert_eq!(summary.balance, -50.0);
        assert!(!summary.is_non_negative());
    }

    #[test]
    fn test_history_sorted_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("transactions.csv"),
            "date,type,name,amount\n\
             2024-01-01,income,First,1\n\
             2024-03-15,income,Second,2\n\
             2024-02-10,expense,Third,-3\n",
        )
        .unwrap();
        let ledger = open_at(&temp_dir, date(2025, 3, 1));

        let history = ledger.history();
        let dates: Vec<_> = history.iter().map(|e| e.transaction.date).collect();
        assert_eq!(dates, vec![date(2024, 3, 15), date(2024, 2, 10), date(2024, 1, 1)]);
        let indexes: Vec<_> = history.iter().map(|e| e.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
    }

    #[test]
    fn test_history_ties_keep_entry_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_at(&temp_dir, date(2025, 3, 1));

        ledger.add(TransactionKind::Income, "A", 1.0).unwrap();
        ledger.add(TransactionKind::Income, "B", 1.0).unwrap();
        ledger.add(TransactionKind::Income, "C", 1.0).unwrap();

        let names: Vec<_> = ledger
            .history()
            .iter()
            .map(|e| e.transaction.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reload_after_add_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_at(&temp_dir, date(2025, 3, 1));
        ledger.add(TransactionKind::Income, "Pay, bonus", 1234.56).unwrap();
        ledger.add(TransactionKind::Expense, "Tea", 0.1).unwrap();

        let reloaded = open_at(&temp_dir, date(2030, 1, 1));
        assert_eq!(reloaded.transactions(), ledger.transactions());
    }

    #[test]
    fn test_save_failure_keeps_transaction_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let blocked = temp_dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();
        let store = RecordStore::new(&blocked);
        let (mut ledger, outcome) =
            Ledger::open_with_clock(store, Box::new(FixedClock(date(2025, 3, 1))));
        assert!(matches!(outcome, LoadOutcome::Failed(_)));

        let added = ledger.add(TransactionKind::Income, "Pay", 10.0).unwrap();
        assert!(!added.is_saved());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.calculate_balance(), 10.0);
    }

    #[test]
    fn test_malformed_row_tolerance() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("transactions.csv"),
            "date,type,name,amount\n\
             2024-01-01,income,Pay,100\n\
             2024-01-02,expense,Broken,twelve\n\
             2024-01-03,expense,Food,-20\n",
        )
        .unwrap();
        let store = RecordStore::new(temp_dir.path().join("transactions.csv"));
        let (ledger, outcome) = Ledger::open(store);

        assert_eq!(ledger.len(), 2);
        assert!(matches!(outcome, LoadOutcome::Loaded { count: 2, skipped: 1 }));
        assert_eq!(ledger.calculate_balance(), 80.0);
    }
}
