//! Account service
//!
//! Business logic for the multi-account book: creating accounts, recording
//! deposits / withdrawals / expenses, per-account balances, the two clear
//! operations and named snapshots (profiles).

use std::path::Path;

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{normalize_account_name, AccountBook, AccountEntry, Confirmation, EntryKind, Money};
use crate::storage::AccountStore;

use super::balance::{account_balance, account_balances, AccountBalance};
use super::{parse_position, ClearOutcome};

/// Result of adding an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAdded {
    /// A new, empty account with this normalised name
    Created(String),
    /// An account with this normalised name was already present; nothing changed
    AlreadyExists(String),
}

impl AccountAdded {
    pub fn name(&self) -> &str {
        match self {
            Self::Created(name) | Self::AlreadyExists(name) => name,
        }
    }
}

/// Raw user input for a new account entry
#[derive(Debug, Clone, Copy, Default)]
pub struct NewEntry<'a> {
    pub account: &'a str,
    pub kind: &'a str,
    pub amount: &'a str,
    pub description: &'a str,
}

/// Service for the multi-account book
pub struct AccountService<'a> {
    store: &'a mut AccountStore,
}

impl<'a> AccountService<'a> {
    pub fn new(store: &'a mut AccountStore) -> Self {
        Self { store }
    }

    /// The whole book, read-only
    pub fn book(&self) -> &AccountBook {
        self.store.book()
    }

    /// Add an empty account under the normalised name
    pub fn add_account(&mut self, name: &str) -> TrackerResult<AccountAdded> {
        let key = normalize_account_name(name)
            .ok_or_else(|| TrackerError::Validation("Account name cannot be empty".into()))?;

        if self.store.book().contains(&key) {
            return Ok(AccountAdded::AlreadyExists(key));
        }

        self.commit(|book| book.insert_account(&key))?
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        info!(account = %key, "account created");

        Ok(AccountAdded::Created(key))
    }

    /// Append an entry to an account.
    ///
    /// If the account doesn't exist it is created only when `create_missing`
    /// is confirmed; otherwise the call fails with a not-found error.
    pub fn record(
        &mut self,
        input: NewEntry<'_>,
        create_missing: Confirmation,
    ) -> TrackerResult<(String, AccountEntry)> {
        let key = normalize_account_name(input.account)
            .ok_or_else(|| TrackerError::Validation("Account name cannot be empty".into()))?;

        let kind = EntryKind::parse(input.kind).ok_or_else(|| {
            TrackerError::Validation(format!(
                "Invalid entry type: '{}'. Valid types: deposit, withdrawal, expense",
                input.kind.trim()
            ))
        })?;

        let amount = Money::parse(input.amount)?;
        if amount.is_negative() {
            return Err(TrackerError::InvalidAmount(input.amount.trim().to_string()));
        }

        let exists = self.store.book().contains(&key);
        if !exists && !create_missing.is_confirmed() {
            return Err(TrackerError::account_not_found(key));
        }

        let entry = AccountEntry::new(kind, amount, input.description);
        let stored = entry.clone();
        self.commit(|book| book.push_entry(&key, stored))?
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        info!(account = %key, kind = %entry.kind, amount = %entry.amount, "entry recorded");

        Ok((key, entry))
    }

    /// Entries of one account, in insertion order
    pub fn entries(&self, account: &str) -> TrackerResult<&[AccountEntry]> {
        self.store
            .book()
            .get(account)
            .ok_or_else(|| TrackerError::account_not_found(account.trim()))
    }

    /// Delete an entry by a raw, user-entered 1-based index
    pub fn delete_entry(&mut self, account: &str, raw_index: &str) -> TrackerResult<AccountEntry> {
        let len = self.entries(account)?.len();
        let index = parse_position(raw_index, len)?;
        self.delete_entry_at(account, index)
    }

    /// Delete an entry by 1-based index, returning the removed entry
    pub fn delete_entry_at(&mut self, account: &str, index: usize) -> TrackerResult<AccountEntry> {
        let len = self.entries(account)?.len();
        if index == 0 || index > len {
            return Err(TrackerError::IndexOutOfRange {
                index: index.to_string(),
                len,
            });
        }

        let removed = self.commit(|book| book.get_mut(account).map(|entries| entries.remove(index - 1)))?;
        let removed = removed.ok_or_else(|| TrackerError::account_not_found(account.trim()))?;
        info!(account = %account.trim(), index, "entry deleted");

        Ok(removed)
    }

    /// Balance of one account
    pub fn balance(&self, account: &str) -> TrackerResult<AccountBalance> {
        self.entries(account).and_then(account_balance)
    }

    /// Balances of every account
    pub fn balances(&self) -> TrackerResult<Vec<(String, AccountBalance)>> {
        account_balances(self.store.book())
    }

    /// Empty every account's entries, keeping the account names
    pub fn clear_balances(&mut self, confirmation: Confirmation) -> TrackerResult<ClearOutcome> {
        if !confirmation.is_confirmed() {
            return Ok(ClearOutcome::Cancelled);
        }

        let count = self.commit(|book| {
            let count = book.entry_count();
            book.clear_entries();
            count
        })?;
        info!(count, "account balances cleared");

        Ok(ClearOutcome::Cleared(count))
    }

    /// Remove every account and its entries
    pub fn clear_all(&mut self, confirmation: Confirmation) -> TrackerResult<ClearOutcome> {
        if !confirmation.is_confirmed() {
            return Ok(ClearOutcome::Cancelled);
        }

        let count = self.commit(|book| {
            let count = book.len();
            book.clear();
            count
        })?;
        info!(count, "all accounts cleared");

        Ok(ClearOutcome::Cleared(count))
    }

    /// Write the current book to an arbitrary file
    pub fn save_as(&self, path: &Path) -> TrackerResult<()> {
        self.store.save_to(path)?;
        info!(path = %path.display(), "profile saved");
        Ok(())
    }

    /// Replace the in-memory book with the contents of another file.
    ///
    /// The current book is discarded without any merge. The loaded book also
    /// becomes the default snapshot. Returns the number of accounts loaded.
    pub fn load_from(&mut self, path: &Path) -> TrackerResult<usize> {
        let loaded = AccountStore::read_from(path)?;
        let count = loaded.len();

        self.commit(|book| *book = loaded)?;
        info!(path = %path.display(), accounts = count, "profile loaded");

        Ok(count)
    }

    /// Apply a mutation and write the snapshot, restoring the previous book
    /// if the write fails.
    fn commit<T>(&mut self, change: impl FnOnce(&mut AccountBook) -> T) -> TrackerResult<T> {
        let before = self.store.book().clone();
        let result = change(self.store.book_mut());

        if let Err(e) = self.store.save() {
            self.store.replace(before);
            return Err(e);
        }

        Ok(result)
    }
}
