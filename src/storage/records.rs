//! Record store for the CSV ledger file
//!
//! Loads the ledger from `transactions.csv` and rewrites the whole file on
//! save. Loading is lenient: malformed rows are skipped and counted, and
//! lower-level failures are captured in the returned [`LoadReport`] instead of
//! being propagated.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, error, info, warn};

use crate::error::{FlowError, FlowResult};
use crate::models::{Transaction, TransactionKind};

use super::file_io::write_csv_atomic;

/// Column order of the ledger file
pub const LEDGER_HEADER: [&str; 4] = ["date", "type", "name", "amount"];

/// What happened when the ledger file was loaded
#[derive(Debug)]
pub enum LoadOutcome {
    /// No ledger file yet; starting empty
    Missing,
    /// File was read; `skipped` rows were malformed and dropped
    Loaded { count: usize, skipped: usize },
    /// File exists but could not be read; nothing was loaded
    Failed(FlowError),
}

/// Result of loading the ledger file
#[derive(Debug)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    pub transactions: Vec<Transaction>,
}

impl LoadReport {
    fn empty(outcome: LoadOutcome) -> Self {
        Self {
            outcome,
            transactions: Vec::new(),
        }
    }
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, Default)]
struct ColumnMap {
    date: Option<usize>,
    kind: Option<usize>,
    name: Option<usize>,
    amount: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut map = Self::default();
        for (idx, header) in headers.iter().enumerate() {
            match header.trim() {
                "date" => map.date = Some(idx),
                "type" => map.kind = Some(idx),
                "name" => map.name = Some(idx),
                "amount" => map.amount = Some(idx),
                _ => {}
            }
        }
        map
    }

    fn field<'r>(&self, record: &'r StringRecord, column: Option<usize>) -> Option<&'r str> {
        column.and_then(|idx| record.get(idx))
    }

    /// Turn one CSV record into a typed transaction
    fn parse_record(&self, record: &StringRecord, today: NaiveDate) -> Result<Transaction, String> {
        let amount_str = self
            .field(record, self.amount)
            .ok_or_else(|| "missing amount".to_string())?
            .trim();
        let amount: f64 = amount_str
            .parse()
            .map_err(|_| format!("invalid amount '{}'", amount_str))?;
        if !amount.is_finite() {
            return Err(format!("invalid amount '{}'", amount_str));
        }

        let kind_str = self.field(record, self.kind).unwrap_or("");
        let kind: TransactionKind = kind_str
            .parse()
            .map_err(|_| format!("invalid type '{}'", kind_str.trim()))?;

        let date = match self.field(record, self.date).map(str::trim) {
            None | Some("") => today,
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| format!("invalid date '{}'", s))?,
        };

        let name = self
            .field(record, self.name)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(Transaction {
            date,
            kind,
            name,
            amount,
        })
    }
}

/// Persists the ledger as a CSV file
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store backed by the given CSV file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every well-formed transaction from disk
    ///
    /// Rows without a date are stamped with `today`. This never fails: a
    /// missing file and an unreadable file are both reported through
    /// [`LoadOutcome`], and in either case no transactions are returned.
    pub fn load(&self, today: NaiveDate) -> LoadReport {
        match self.path.try_exists() {
            Ok(true) => {}
            Ok(false) => {
                info!(path = %self.path.display(), "Ledger file not found, starting empty");
                return LoadReport::empty(LoadOutcome::Missing);
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Cannot access ledger file");
                return LoadReport::empty(LoadOutcome::Failed(FlowError::Storage(format!(
                    "Failed to access {}: {}",
                    self.path.display(),
                    e
                ))));
            }
        }

        match self.read_rows(today) {
            Ok((transactions, skipped)) => {
                info!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    skipped,
                    "Loaded ledger"
                );
                LoadReport {
                    outcome: LoadOutcome::Loaded {
                        count: transactions.len(),
                        skipped,
                    },
                    transactions,
                }
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to load ledger");
                LoadReport::empty(LoadOutcome::Failed(e))
            }
        }
    }

    fn read_rows(&self, today: NaiveDate) -> FlowResult<(Vec<Transaction>, usize)> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                FlowError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let columns = ColumnMap::from_headers(reader.headers()?);

        let mut transactions = Vec::new();
        let mut skipped = 0;

        for (idx, result) in reader.records().enumerate() {
            // Framing and encoding errors abort the whole load
            let record = result?;
            match columns.parse_record(&record, today) {
                Ok(txn) => transactions.push(txn),
                Err(reason) => {
                    // +2: one for the header, one for 1-based numbering
                    warn!(row = idx + 2, %reason, record = ?record, "Skipping malformed transaction row");
                    skipped += 1;
                }
            }
        }

        Ok((transactions, skipped))
    }

    /// Rewrite the ledger file with every transaction, in order
    pub fn save(&self, transactions: &[Transaction]) -> FlowResult<()> {
        write_csv_atomic(&self.path, &LEDGER_HEADER, transactions)?;
        debug!(path = %self.path.display(), count = transactions.len(), "Saved ledger");
        Ok(())
    }
}
