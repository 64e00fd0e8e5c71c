//! Balance calculations
//!
//! Stateless aggregation over the current ledger contents. Nothing is cached;
//! every call walks the full list. Totals use checked arithmetic, so a sum
//! that does not fit is an `Overflow` error rather than a wrapped value.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{AccountBook, AccountEntry, EntryKind, Money, Transaction};

/// Income / expense totals for the single-account ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerBalance {
    /// Sum of positive amounts
    pub income: Money,
    /// Absolute value of the sum of negative amounts
    pub expenses: Money,
    /// income - expenses
    pub net: Money,
}

/// Per-account totals for the multi-account book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountBalance {
    pub deposits: Money,
    pub withdrawals: Money,
    pub expenses: Money,
    /// deposits - withdrawals - expenses
    pub balance: Money,
}

fn total<I: IntoIterator<Item = Money>>(amounts: I, what: &str) -> TrackerResult<Money> {
    Money::checked_sum(amounts).ok_or_else(|| TrackerError::Overflow(what.to_string()))
}

/// Compute income, expenses and net for a transaction list.
///
/// Returns None for an empty list so callers can tell "no data" apart from
/// a ledger that nets to zero.
pub fn ledger_balance(transactions: &[Transaction]) -> TrackerResult<Option<LedgerBalance>> {
    if transactions.is_empty() {
        return Ok(None);
    }

    let income = total(
        transactions.iter().filter(|t| t.is_income()).map(|t| t.amount),
        "income",
    )?;
    let outflow = total(
        transactions.iter().filter(|t| t.is_expense()).map(|t| t.amount),
        "expenses",
    )?;

    let overflow = |what: &str| TrackerError::Overflow(what.to_string());
    Ok(Some(LedgerBalance {
        income,
        expenses: outflow.checked_abs().ok_or_else(|| overflow("expenses"))?,
        net: income.checked_add(outflow).ok_or_else(|| overflow("net balance"))?,
    }))
}

/// Compute deposit, withdrawal and expense totals for one account
pub fn account_balance(entries: &[AccountEntry]) -> TrackerResult<AccountBalance> {
    let total_of = |kind: EntryKind, what: &str| -> TrackerResult<Money> {
        total(
            entries.iter().filter(|e| e.kind == kind).map(|e| e.amount),
            what,
        )
    };

    let deposits = total_of(EntryKind::Deposit, "deposits")?;
    let withdrawals = total_of(EntryKind::Withdrawal, "withdrawals")?;
    let expenses = total_of(EntryKind::Expense, "expenses")?;

    let balance = deposits
        .checked_sub(withdrawals)
        .and_then(|b| b.checked_sub(expenses))
        .ok_or_else(|| TrackerError::Overflow("account balance".to_string()))?;

    Ok(AccountBalance {
        deposits,
        withdrawals,
        expenses,
        balance,
    })
}

/// Balances for every account, in account order. There is no combined total.
pub fn account_balances(book: &AccountBook) -> TrackerResult<Vec<(String, AccountBalance)>> {
    book.iter()
        .map(|(name, entries)| Ok((name.to_string(), account_balance(entries)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(cents: i64) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            "t",
            "c",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    fn entry(kind: EntryKind, cents: i64) -> AccountEntry {
        AccountEntry::new(kind, Money::from_cents(cents), "e")
    }

    #[test]
    fn test_empty_ledger_has_no_balance() {
        assert_eq!(ledger_balance(&[]).unwrap(), None);
    }

    #[test]
    fn test_ledger_balance() {
        let balance = ledger_balance(&[txn(10000), txn(-4000)]).unwrap().unwrap();
        assert_eq!(balance.income, Money::from_cents(10000));
        assert_eq!(balance.expenses, Money::from_cents(4000));
        assert_eq!(balance.net, Money::from_cents(6000));
    }

    #[test]
    fn test_zero_net_is_still_a_balance() {
        let balance = ledger_balance(&[txn(500), txn(-500), txn(0)]).unwrap().unwrap();
        assert!(balance.net.is_zero());
        assert_eq!(balance.income, Money::from_cents(500));
    }

    #[test]
    fn test_net_can_be_negative() {
        let balance = ledger_balance(&[txn(-2500)]).unwrap().unwrap();
        assert_eq!(balance.income, Money::zero());
        assert_eq!(balance.expenses, Money::from_cents(2500));
        assert_eq!(balance.net, Money::from_cents(-2500));
    }

    #[test]
    fn test_account_balance() {
        let balance = account_balance(&[
            entry(EntryKind::Deposit, 10000),
            entry(EntryKind::Withdrawal, 3000),
            entry(EntryKind::Expense, 2000),
        ])
        .unwrap();
        assert_eq!(balance.deposits, Money::from_cents(10000));
        assert_eq!(balance.withdrawals, Money::from_cents(3000));
        assert_eq!(balance.expenses, Money::from_cents(2000));
        assert_eq!(balance.balance, Money::from_cents(5000));
    }

    #[test]
    fn test_empty_account_balance_is_zero() {
        assert_eq!(account_balance(&[]).unwrap(), AccountBalance::default());
    }

    #[test]
    fn test_account_balances_are_independent() {
        let mut book = AccountBook::new();
        book.insert_account("a").unwrap();
        book.insert_account("b").unwrap();
        book.get_mut("a").unwrap().push(entry(EntryKind::Deposit, 700));
        book.get_mut("b").unwrap().push(entry(EntryKind::Expense, 200));

        let balances = account_balances(&book).unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].0, "A");
        assert_eq!(balances[0].1.balance, Money::from_cents(700));
        assert_eq!(balances[1].0, "B");
        assert_eq!(balances[1].1.balance, Money::from_cents(-200));
    }

    #[test]
    fn test_ledger_balance_at_amount_limit() {
        let max = Money::MAX_CENTS;
        let balance = ledger_balance(&[txn(max), txn(max), txn(-max)])
            .unwrap()
            .unwrap();

        assert_eq!(balance.income, Money::from_cents(2 * max));
        assert_eq!(balance.expenses, Money::MAX);
        assert_eq!(balance.net, Money::MAX);
    }

    #[test]
    fn test_ledger_balance_overflow_is_an_error() {
        let half = i64::MAX / 2 + 1;

        let err = ledger_balance(&[txn(half), txn(half)]).unwrap_err();
        assert!(matches!(err, TrackerError::Overflow(ref what) if what == "income"));

        let err = ledger_balance(&[txn(-half), txn(-half), txn(-half)]).unwrap_err();
        assert!(matches!(err, TrackerError::Overflow(_)));
    }

    #[test]
    fn test_account_balance_overflow_is_an_error() {
        let err = account_balance(&[
            entry(EntryKind::Withdrawal, i64::MAX),
            entry(EntryKind::Expense, i64::MAX),
        ])
        .unwrap_err();
        assert!(matches!(err, TrackerError::Overflow(ref what) if what == "account balance"));

        let mut book = AccountBook::new();
        book.push_entry("a", entry(EntryKind::Deposit, i64::MAX)).unwrap();
        book.push_entry("a", entry(EntryKind::Deposit, 1)).unwrap();
        assert!(account_balances(&book).is_err());
    }
}
