//! Ledger service
//!
//! Business logic for the single-account transaction ledger: add, list,
//! delete and clear. Each mutation is written to disk before it returns; if
//! the write fails the in-memory list is rolled back.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_date, Confirmation, Money, Transaction};
use crate::storage::LedgerStore;

use super::balance::{ledger_balance, LedgerBalance};
use super::{parse_position, ClearOutcome};

/// Raw user input for a new transaction
#[derive(Debug, Clone, Copy, Default)]
pub struct NewTransaction<'a> {
    pub amount: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    /// YYYY-MM-DD; None or blank means today
    pub date: Option<&'a str>,
}

/// Service for the single-account ledger
pub struct LedgerService<'a> {
    store: &'a mut LedgerStore,
}

impl<'a> LedgerService<'a> {
    pub fn new(store: &'a mut LedgerStore) -> Self {
        Self { store }
    }

    /// Add a transaction dated today unless a date is given
    pub fn add(&mut self, input: NewTransaction<'_>) -> TrackerResult<Transaction> {
        self.add_with_default_date(input, Local::now().date_naive())
    }

    /// Add a transaction, using `today` when the input carries no date
    pub fn add_with_default_date(
        &mut self,
        input: NewTransaction<'_>,
        today: NaiveDate,
    ) -> TrackerResult<Transaction> {
        let amount = Money::parse(input.amount)?;

        let date = match input.date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => parse_date(raw).ok_or_else(|| TrackerError::InvalidDate(raw.to_string()))?,
            None => today,
        };

        let transaction = Transaction::new(amount, input.description, input.category, date);

        self.commit(|store| store.push(transaction.clone()))?;
        info!(amount = %transaction.amount, "transaction added");

        Ok(transaction)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// Delete by a raw, user-entered 1-based index
    pub fn delete(&mut self, raw_index: &str) -> TrackerResult<Transaction> {
        let index = parse_position(raw_index, self.store.len())?;
        self.delete_at(index)
    }

    /// Delete by 1-based index, returning the removed transaction
    pub fn delete_at(&mut self, index: usize) -> TrackerResult<Transaction> {
        let len = self.store.len();
        if index == 0 || index > len {
            return Err(TrackerError::IndexOutOfRange {
                index: index.to_string(),
                len,
            });
        }

        let removed = self.commit(|store| store.remove(index - 1))?;
        let removed = removed.ok_or_else(|| TrackerError::IndexOutOfRange {
            index: index.to_string(),
            len,
        })?;
        info!(index, "transaction deleted");

        Ok(removed)
    }

    /// Remove every transaction, if confirmed
    pub fn clear(&mut self, confirmation: Confirmation) -> TrackerResult<ClearOutcome> {
        if !confirmation.is_confirmed() {
            return Ok(ClearOutcome::Cancelled);
        }

        let count = self.commit(LedgerStore::clear)?;
        info!(count, "ledger cleared");

        Ok(ClearOutcome::Cleared(count))
    }

    /// Income, expenses and net; None when the ledger is empty
    pub fn balance(&self) -> TrackerResult<Option<LedgerBalance>> {
        ledger_balance(self.store.transactions())
    }

    /// Apply a mutation and write the snapshot, restoring the previous list
    /// if the write fails.
    fn commit<T>(&mut self, change: impl FnOnce(&mut LedgerStore) -> T) -> TrackerResult<T> {
        let before = self.store.transactions().to_vec();
        let result = change(&mut *self.store);

        if let Err(e) = self.store.save() {
            self.store.replace(before);
            return Err(e);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("ledger.json"));
        (temp_dir, store)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn add(service: &mut LedgerService<'_>, amount: &str, description: &str) -> Transaction {
        service
            .add_with_default_date(
                NewTransaction {
                    amount,
                    description,
                    category: "General",
                    date: None,
                },
                today(),
            )
            .unwrap()
    }

    #[test]
    fn test_add_uses_today_when_date_blank() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);

        let txn = service
            .add_with_default_date(
                NewTransaction {
                    amount: "12.50",
                    description: "Lunch",
                    category: "Food",
                    date: Some("  "),
                },
                today(),
            )
            .unwrap();

        assert_eq!(txn.date, today());
        assert_eq!(txn.amount, Money::from_cents(1250));
    }

    #[test]
    fn test_add_with_explicit_date() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);

        let txn = service
            .add(NewTransaction {
                amount: "-5",
                description: "Coffee",
                category: "Food",
                date: Some("2024-02-29"),
            })
            .unwrap();

        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_add_is_persisted_immediately() {
        let (temp_dir, mut store) = create_test_store();
        add(&mut LedgerService::new(&mut store), "100", "Salary");

        let reopened = LedgerStore::open(temp_dir.path().join("ledger.json"));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.transactions()[0].description, "Salary");
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);

        let err = service
            .add(NewTransaction {
                amount: "ten",
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, TrackerError::InvalidAmount(ref s) if s == "ten"));
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);

        let err = service
            .add(NewTransaction {
                amount: "1",
                date: Some("01/02/2025"),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, TrackerError::InvalidDate(_)));
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_round_trip_after_adds() {
        let (temp_dir, mut store) = create_test_store();
        {
            let mut service = LedgerService::new(&mut store);
            add(&mut service, "100", "a");
            add(&mut service, "-40", "b");
            add(&mut service, "0.01", "c");
        }

        let reopened = LedgerStore::open(temp_dir.path().join("ledger.json"));
        assert_eq!(reopened.transactions(), store.transactions());
    }

    #[test]
    fn test_delete_preserves_order() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);
        for (amount, name) in [("1", "a"), ("2", "b"), ("3", "c"), ("4", "d")] {
            add(&mut service, amount, name);
        }

        let removed = service.delete("2").unwrap();
        assert_eq!(removed.description, "b");

        let remaining: Vec<_> = service.list().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(remaining, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);
        add(&mut service, "1", "a");

        for raw in ["0", "2", "-1"] {
            let err = service.delete(raw).unwrap_err();
            assert!(
                matches!(err, TrackerError::IndexOutOfRange { len: 1, .. }),
                "{}: {:?}",
                raw,
                err
            );
        }
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_delete_non_integer() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);
        add(&mut service, "1", "a");

        for raw in ["one", "1.0", ""] {
            let err = service.delete(raw).unwrap_err();
            assert!(matches!(err, TrackerError::InvalidIndex(_)), "{}", raw);
        }
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let (temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);
        add(&mut service, "1", "a");
        add(&mut service, "2", "b");

        assert_eq!(
            service.clear(Confirmation::Declined).unwrap(),
            ClearOutcome::Cancelled
        );
        assert_eq!(service.list().len(), 2);

        assert_eq!(
            service.clear(Confirmation::Confirmed).unwrap(),
            ClearOutcome::Cleared(2)
        );
        assert!(service.list().is_empty());

        let reopened = LedgerStore::open(temp_dir.path().join("ledger.json"));
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_balance() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);
        assert!(service.balance().unwrap().is_none());

        add(&mut service, "100", "in");
        add(&mut service, "-40", "out");

        let balance = service.balance().unwrap().unwrap();
        assert_eq!(balance.income.to_string(), "$100.00");
        assert_eq!(balance.expenses.to_string(), "$40.00");
        assert_eq!(balance.net.to_string(), "$60.00");
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the snapshot file should be makes the rename fail
        let path = temp_dir.path().join("ledger.json");
        std::fs::create_dir_all(path.join("occupied")).unwrap();
        let mut store = LedgerStore::new(path);
        let mut service = LedgerService::new(&mut store);

        let result = service.add(NewTransaction {
            amount: "1",
            ..Default::default()
        });

        assert!(result.is_err());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_add_rejects_amount_beyond_limit() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);

        for amount in ["90000000000000000", "1000000000000", "90071992547409.93"] {
            let err = service
                .add(NewTransaction {
                    amount,
                    ..Default::default()
                })
                .unwrap_err();
            assert!(matches!(err, TrackerError::AmountOutOfRange(_)), "{}", amount);
        }
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_balance_with_amounts_at_limit() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = LedgerService::new(&mut store);
        add(&mut service, "999999999999.99", "a");
        add(&mut service, "999999999999.99", "b");

        let balance = service.balance().unwrap().unwrap();
        assert_eq!(balance.income.cents(), 2 * Money::MAX_CENTS);
        assert_eq!(balance.net, balance.income);
    }

    #[test]
    fn test_round_trip_at_amount_limit() {
        let (temp_dir, mut store) = create_test_store();
        {
            let mut service = LedgerService::new(&mut store);
            add(&mut service, "999999999999.99", "max");
            add(&mut service, "-999999999999.99", "min");
            add(&mut service, "999999999999.93", "near");
            add(&mut service, "90071992547.41", "odd");
        }

        let reopened = LedgerStore::open(temp_dir.path().join("ledger.json"));
        assert_eq!(reopened.transactions(), store.transactions());
        assert_eq!(reopened.transactions()[0].amount, Money::MAX);
    }
}
