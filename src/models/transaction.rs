//! Transaction model
//!
//! Represents a single income or expense entry. The sign of `amount` mirrors
//! the kind: income is stored positive, expenses negative.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::FlowError;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Lowercase name as stored in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Apply this kind's sign to a positive magnitude
    pub fn signed(&self, magnitude: f64) -> f64 {
        match self {
            Self::Income => magnitude,
            Self::Expense => -magnitude,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(FlowError::unknown_kind(s.trim())),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Date the entry was recorded
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Free-text description
    pub name: String,

    /// Signed amount (positive for income, negative for expense)
    #[serde(serialize_with = "plain_decimal")]
    pub amount: f64,
}

/// Write an amount as a plain decimal (`1000000000000000000000`, `-0.0000001`).
/// The csv serializer would otherwise switch to exponent form for very large or
/// very small values.
fn plain_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl Transaction {
    /// Create a transaction from a positive magnitude, applying the kind's sign
    /// and trimming the description
    pub fn new(date: NaiveDate, kind: TransactionKind, name: &str, magnitude: f64) -> Self {
        Self {
            date,
            kind,
            name: name.trim().to_string(),
            amount: kind.signed(magnitude),
        }
    }

    /// Check if this is income (positive amount)
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    /// Check if this is an expense (negative amount)
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }

    /// Check that the stored sign agrees with the kind
    pub fn sign_matches_kind(&self) -> bool {
        match self.kind {
            TransactionKind::Income => self.amount > 0.0,
            TransactionKind::Expense => self.amount < 0.0,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.name,
            self.amount
        )
    }
}
