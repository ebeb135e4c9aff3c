//! Fixed-point currency amounts.
//!
//! Amounts are whole cents in a `u64`, so a balance can never go negative and
//! adding prices never accumulates floating-point drift.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const CENTS_PER_UNIT: u64 = 100;

/// A non-negative amount of money, stored as cents.
///
/// Serialised as its decimal string form (`"150.00"`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units (`from_units(7)` is 7.00). Saturates on overflow.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(CENTS_PER_UNIT))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// `None` when `other` is larger than `self`.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Money {
    type Err = DomainError;

    /// Accepts `"7"`, `"7.5"` and `"7.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((_, "")) => {
                return Err(DomainError::validation(format!("invalid amount: {s:?}")));
            }
            Some(parts) => parts,
            None => (s, ""),
        };

        if whole.is_empty() || !all_digits(whole) {
            return Err(DomainError::validation(format!("invalid amount: {s:?}")));
        }
        if frac.len() > 2 || !all_digits(frac) {
            return Err(DomainError::validation(format!(
                "amount {s:?} must have at most two decimal digits"
            )));
        }

        let units: u64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("amount {s:?} is too large")))?;
        let cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().unwrap_or(0) * 10,
            _ => frac.parse::<u64>().unwrap_or(0),
        };

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("amount {s:?} is too large")))
    }
}

impl TryFrom<String> for Money {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}
