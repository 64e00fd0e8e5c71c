//! Account book store for JSON storage
//!
//! Holds the multi-account book in memory and mirrors it to `accounts.json`
//! as a JSON object of account name to `[type, amount, description]` entries.
//! Books can also be written to and read from arbitrary files (profiles).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::AccountBook;

use super::file_io::{read_json_or_default, read_json_required, write_json_atomic};

/// In-memory account book backed by a snapshot file
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    book: AccountBook,
}

impl AccountStore {
    /// Create an empty store that will save to `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            book: AccountBook::new(),
        }
    }

    /// Create a store and populate it from `path`
    pub fn open(path: PathBuf) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Replace the in-memory book with the file contents (empty on a missing
    /// or malformed file)
    pub fn load(&mut self) {
        self.book = read_json_or_default(&self.path);
        debug!(accounts = self.book.len(), "account book loaded");
    }

    /// Write the full book to the default snapshot file
    pub fn save(&self) -> TrackerResult<()> {
        write_json_atomic(&self.path, &self.book)
    }

    /// Write the full book to another file
    pub fn save_to(&self, path: &Path) -> TrackerResult<()> {
        write_json_atomic(path, &self.book)
    }

    /// Read a book from another file without touching the in-memory one
    pub fn read_from(path: &Path) -> TrackerResult<AccountBook> {
        read_json_required(path).map_err(|e| {
            if e.is_not_found() {
                TrackerError::profile_not_found(path.display().to_string())
            } else {
                e
            }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn book(&self) -> &AccountBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AccountBook {
        &mut self.book
    }

    /// Swap in a whole new book, returning the old one
    pub fn replace(&mut self, book: AccountBook) -> AccountBook {
        std::mem::replace(&mut self.book, book)
    }
}
