//! Date source for stamping new transactions

use chrono::{Local, NaiveDate};

/// Supplies "today" to the ledger
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Real clock backed by the local system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
