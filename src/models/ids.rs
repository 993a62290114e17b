//! Strongly-typed ID wrapper for expenses
//!
//! Expense IDs are assigned by the database. Wrapping them prevents mixing an
//! ID up with any other integer (a year, a limit, an amount in cents).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw database row ID
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw database row ID
    pub const fn as_raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    /// Accepts "12" as well as "#12"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("12".parse::<ExpenseId>().unwrap(), ExpenseId::from_raw(12));
        assert_eq!("#7".parse::<ExpenseId>().unwrap(), ExpenseId::from_raw(7));
        assert!("abc".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExpenseId::from_raw(42).to_string(), "42");
    }
}
