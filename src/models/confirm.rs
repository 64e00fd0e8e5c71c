//! Confirmation for destructive operations
//!
//! Clearing a ledger needs an explicit affirmative answer. Collecting that
//! answer is the shell's job; the ledger only sees the resulting value.

/// The caller's answer to "are you sure?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    Confirmed,
    #[default]
    Declined,
}

impl Confirmation {
    /// Interpret a free-text answer. Only "yes" (any casing, surrounding
    /// whitespace ignored) confirms; everything else declines.
    pub fn from_response(response: &str) -> Self {
        if response.trim().eq_ignore_ascii_case("yes") {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}
