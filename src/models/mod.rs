//! Core data models for the budget tracker
//!
//! This module contains the data structures for both ledger flavours: the
//! flat single-account transaction list and the multi-account book.

pub mod account;
pub mod confirm;
pub mod money;
pub mod transaction;

pub use account::{normalize_account_name, AccountBook, AccountEntry, AccountNameError, EntryKind};
pub use confirm::Confirmation;
pub use money::{Money, MoneyParseError};
pub use transaction::{parse_date, Transaction, DATE_FORMAT};
