//! Account model
//!
//! Multi-account ledger: named accounts, each holding an ordered list of
//! deposit / withdrawal / expense entries. Account names are normalised
//! (trimmed, first letter upper-case, remainder lower-case) on every insertion
//! and lookup, so "checking", " CHECKING " and "Checking" are one account.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use super::money::Money;

/// Type of an account entry. The type, not the sign, decides the effect on
/// the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    Expense,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [Self::Deposit, Self::Withdrawal, Self::Expense];

    /// Parse entry kind from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Some(Self::Deposit),
            "withdrawal" | "withdraw" => Some(Self::Withdrawal),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// One entry in an account. Stored on disk as `[type, amount, description]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(EntryKind, Money, String)",
    into = "(EntryKind, Money, String)"
)]
pub struct AccountEntry {
    pub kind: EntryKind,
    /// Always non-negative
    pub amount: Money,
    pub description: String,
}

impl AccountEntry {
    pub fn new(kind: EntryKind, amount: Money, description: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
        }
    }
}

impl From<(EntryKind, Money, String)> for AccountEntry {
    fn from((kind, amount, description): (EntryKind, Money, String)) -> Self {
        Self {
            kind,
            amount,
            description,
        }
    }
}

impl From<AccountEntry> for (EntryKind, Money, String) {
    fn from(entry: AccountEntry) -> Self {
        (entry.kind, entry.amount, entry.description)
    }
}

impl fmt::Display for AccountEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.kind, self.amount, self.description)
    }
}

/// Normalise an account name: trim surrounding whitespace, upper-case the
/// first character and lower-case the rest.
///
/// Returns None if nothing is left after trimming.
///
/// ```
/// use budget_tracker::models::normalize_account_name;
/// assert_eq!(normalize_account_name("  my SAVINGS "), Some("My savings".to_string()));
/// assert_eq!(normalize_account_name("   "), None);
/// ```
pub fn normalize_account_name(name: &str) -> Option<String> {
    let mut chars = name.trim().chars();
    let first = chars.next()?;
    Some(
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    )
}

/// Validation errors for account names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountNameError {
    EmptyName,
}

impl fmt::Display for AccountNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
        }
    }
}

impl std::error::Error for AccountNameError {}

/// Mapping of normalised account name to that account's entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccountBook {
    accounts: BTreeMap<String, Vec<AccountEntry>>,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty account. Returns the normalised name and whether it
    /// was newly created.
    pub fn insert_account(&mut self, name: &str) -> Result<(String, bool), AccountNameError> {
        let key = normalize_account_name(name).ok_or(AccountNameError::EmptyName)?;
        match self.accounts.entry(key.clone()) {
            btree_map::Entry::Occupied(_) => Ok((key, false)),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                Ok((key, true))
            }
        }
    }

    /// Append an entry, creating the account if needed. Returns the
    /// normalised name and whether the account was newly created.
    pub fn push_entry(
        &mut self,
        name: &str,
        entry: AccountEntry,
    ) -> Result<(String, bool), AccountNameError> {
        let key = normalize_account_name(name).ok_or(AccountNameError::EmptyName)?;
        let created = !self.accounts.contains_key(&key);
        self.accounts.entry(key.clone()).or_default().push(entry);
        Ok((key, created))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries of an account, looked up by any casing of its name
    pub fn get(&self, name: &str) -> Option<&[AccountEntry]> {
        let key = normalize_account_name(name)?;
        self.accounts.get(&key).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<AccountEntry>> {
        let key = normalize_account_name(name)?;
        self.accounts.get_mut(&key)
    }

    /// Account names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AccountEntry])> {
        self.accounts
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Total number of entries across all accounts
    pub fn entry_count(&self) -> usize {
        self.accounts.values().map(Vec::len).sum()
    }

    /// Empty every account's entries, keeping the accounts themselves
    pub fn clear_entries(&mut self) {
        for entries in self.accounts.values_mut() {
            entries.clear();
        }
    }

    /// Remove every account
    pub fn clear(&mut self) {
        self.accounts.clear();
    }
}

impl<'de> Deserialize<'de> for AccountBook {
    /// Keys read from disk go through the same normalisation as user input;
    /// entries of keys that collapse to the same name are concatenated.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Vec<AccountEntry>>::deserialize(deserializer)?;
        let mut book = AccountBook::new();
        for (name, entries) in raw {
            let Some(key) = normalize_account_name(&name) else {
                continue;
            };
            book.accounts.entry(key).or_default().extend(entries);
        }
        Ok(book)
    }
}
