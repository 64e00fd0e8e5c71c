//! Storage layer for the budget tracker
//!
//! Provides JSON snapshot storage with atomic writes and fail-soft loading.

pub mod accounts;
pub mod file_io;
pub mod ledger;

pub use accounts::AccountStore;
pub use file_io::{backup_path, read_json_or_default, read_json_required, write_json_atomic};
pub use ledger::LedgerStore;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Main storage coordinator that owns both ledgers
#[derive(Debug)]
pub struct Storage {
    paths: TrackerPaths,
    pub ledger: LedgerStore,
    pub accounts: AccountStore,
}

impl Storage {
    /// Create a new Storage instance with empty in-memory state
    pub fn new(paths: TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerStore::new(paths.ledger_file()),
            accounts: AccountStore::new(paths.accounts_file()),
            paths,
        })
    }

    /// Create a Storage instance and load both ledgers from disk
    pub fn open(paths: TrackerPaths) -> TrackerResult<Self> {
        let mut storage = Self::new(paths)?;
        storage.load_all();
        Ok(storage)
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) {
        self.ledger.load();
        self.accounts.load();
    }

    /// Save all data to disk
    pub fn save_all(&self) -> TrackerResult<()> {
        self.ledger.save()?;
        self.accounts.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.ledger.is_empty());
        assert!(storage.accounts.book().is_empty());
    }

    #[test]
    fn test_save_all_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        storage.save_all().unwrap();
        assert!(paths.ledger_file().exists());
        assert!(paths.accounts_file().exists());
    }
}
