use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{category::Category, expense::ExpenseRecord};

/// In-memory expense store keyed by calendar date.
///
/// Records for the same date keep their insertion order, and dates remember
/// the order in which they were first used. `iter` runs chronologically,
/// `iter_first_seen` in that first-use order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    entries: IndexMap<NaiveDate, Vec<ExpenseRecord>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an expense to the given date. Inputs are expected to be
    /// validated by the caller.
    pub fn insert(&mut self, date: NaiveDate, category: Category, amount: f64) {
        debug!(%date, %category, amount, "recording expense");
        self.entries
            .entry(date)
            .or_default()
            .push(ExpenseRecord::new(category, amount));
    }

    pub fn records(&self, date: NaiveDate) -> &[ExpenseRecord] {
        self.entries.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dates ascending.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[ExpenseRecord])> {
        self.dates().map(move |date| (date, self.records(date)))
    }

    /// Dates in the order each was first inserted.
    pub fn iter_first_seen(&self) -> impl Iterator<Item = (NaiveDate, &[ExpenseRecord])> {
        self.entries
            .iter()
            .map(|(date, records)| (*date, records.as_slice()))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.entries.keys().copied().collect();
        dates.sort_unstable();
        dates.into_iter()
    }

    pub fn date_count(&self) -> usize {
        self.entries.len()
    }

    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
