//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! input parsing and validation, confirmation handling, and the immediate
//! snapshot write after every mutation.

pub mod account;
pub mod balance;
pub mod ledger;

pub use account::{AccountAdded, AccountService, NewEntry};
pub use balance::{account_balance, account_balances, ledger_balance, AccountBalance, LedgerBalance};
pub use ledger::{LedgerService, NewTransaction};

use crate::error::{TrackerError, TrackerResult};

/// Result of a confirmation-gated clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Number of items removed
    Cleared(usize),
    /// The caller did not confirm; nothing changed
    Cancelled,
}

/// Parse a user-entered 1-based position into `[1, len]`
pub fn parse_position(raw: &str, len: usize) -> TrackerResult<usize> {
    let trimmed = raw.trim();
    let out_of_range = || TrackerError::IndexOutOfRange {
        index: trimmed.to_string(),
        len,
    };

    let index: i64 = match trimmed.parse() {
        Ok(index) => index,
        // A well-formed integer too large for i64 is still just out of range
        Err(_) if is_integer(trimmed) => return Err(out_of_range()),
        Err(_) => return Err(TrackerError::InvalidIndex(trimmed.to_string())),
    };

    if index < 1 || index as u64 > len as u64 {
        return Err(out_of_range());
    }

    Ok(index as usize)
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1", 3).unwrap(), 1);
        assert_eq!(parse_position(" 3\n", 3).unwrap(), 3);
        assert!(matches!(
            parse_position("4", 3),
            Err(TrackerError::IndexOutOfRange { ref index, len: 3 }) if index == "4"
        ));
        assert!(matches!(
            parse_position("-2", 3),
            Err(TrackerError::IndexOutOfRange { ref index, .. }) if index == "-2"
        ));
        assert!(matches!(
            parse_position("2.5", 3),
            Err(TrackerError::InvalidIndex(_))
        ));
        assert!(matches!(
            parse_position("1", 0),
            Err(TrackerError::IndexOutOfRange { len: 0, .. })
        ));
    }

    #[test]
    fn test_parse_position_huge_integer_is_out_of_range() {
        for raw in ["99999999999999999999", "-99999999999999999999", "+18446744073709551616"] {
            assert!(
                matches!(
                    parse_position(raw, 3),
                    Err(TrackerError::IndexOutOfRange { ref index, len: 3 }) if index == raw
                ),
                "{}",
                raw
            );
        }
        assert!(matches!(
            parse_position("9999999999999999999x", 3),
            Err(TrackerError::InvalidIndex(_))
        ));
        assert!(matches!(parse_position("+", 3), Err(TrackerError::InvalidIndex(_))));
    }
}
