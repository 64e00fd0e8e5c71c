//! Budget Tracker - terminal-based personal budget tracking
//!
//! This library provides the core functionality for the `budget` command line
//! application. It keeps two independent ledgers:
//!
//! - a single-account list of dated transactions, where the sign of the
//!   amount tells income from expense
//! - a multi-account book of named accounts, each with typed deposit,
//!   withdrawal and expense entries
//!
//! Both are persisted as JSON snapshots, written in full after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (money, transactions, accounts)
//! - `storage`: JSON snapshot storage
//! - `services`: Business logic and balance calculations
//! - `display`: Text formatting for terminal output
//! - `export`: CSV export
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::config::TrackerPaths;
//! use budget_tracker::services::{LedgerService, NewTransaction};
//! use budget_tracker::storage::Storage;
//!
//! # fn main() -> Result<(), budget_tracker::TrackerError> {
//! let mut storage = Storage::open(TrackerPaths::new()?)?;
//! let mut ledger = LedgerService::new(&mut storage.ledger);
//! ledger.add(NewTransaction {
//!     amount: "-12.50",
//!     description: "Lunch",
//!     category: "Food",
//!     date: None,
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TrackerError;
