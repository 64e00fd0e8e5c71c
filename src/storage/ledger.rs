//! Ledger store for JSON storage
//!
//! Holds the single-account transaction list in memory and mirrors it to
//! `ledger.json` as a top-level JSON array.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TrackerResult;
use crate::models::Transaction;

use super::file_io::{read_json_or_default, write_json_atomic};

/// In-memory transaction list backed by a snapshot file
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    /// Create an empty store that will save to `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
        }
    }

    /// Create a store and populate it from `path`
    pub fn open(path: PathBuf) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Replace the in-memory list with the file contents (empty on a missing
    /// or malformed file)
    pub fn load(&mut self) {
        self.transactions = read_json_or_default(&self.path);
        debug!(count = self.transactions.len(), "ledger loaded");
    }

    /// Write the full list to disk
    pub fn save(&self) -> TrackerResult<()> {
        write_json_atomic(&self.path, &self.transactions)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Remove by zero-based position
    pub fn remove(&mut self, position: usize) -> Option<Transaction> {
        if position < self.transactions.len() {
            Some(self.transactions.remove(position))
        } else {
            None
        }
    }

    /// Swap in a whole new list, returning the old one
    pub fn replace(&mut self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        std::mem::replace(&mut self.transactions, transactions)
    }

    /// Remove everything, returning how many transactions were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.transactions.len();
        self.transactions.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let store = LedgerStore::new(path);
        (temp_dir, store)
    }

    fn txn(cents: i64, description: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            description,
            "Misc",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut store) = create_test_store();
        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut store) = create_test_store();
        store.push(txn(10000, "Salary"));
        store.push(txn(-4000, "Groceries"));
        store.save().unwrap();

        let reopened = LedgerStore::open(temp_dir.path().join("ledger.json"));
        assert_eq!(reopened.transactions(), store.transactions());
    }

    #[test]
    fn test_file_is_top_level_array() {
        let (_temp_dir, mut store) = create_test_store();
        store.push(txn(-1250, "Lunch"));
        store.save().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["description"], "Lunch");
        assert_eq!(items[0]["amount"], serde_json::json!(-12.5));
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (_temp_dir, mut store) = create_test_store();
        fs::write(store.path(), "this is not json").unwrap();

        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let (_temp_dir, mut store) = create_test_store();
        store.push(txn(100, "a"));
        store.push(txn(200, "b"));

        assert!(store.remove(5).is_none());
        assert_eq!(store.remove(0).unwrap().description, "a");
        assert_eq!(store.len(), 1);
        assert_eq!(store.clear(), 1);
        assert!(store.is_empty());
    }
}
