//! Money display helper.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in US dollars.
///
/// Wraps a [`Decimal`] so arithmetic stays exact; rounding to two decimals
/// happens only when formatting for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The inner decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    /// Formats as `$12.34`, rounded to two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0.round_dp(2))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_rounds_to_two_decimals() {
        let money = Money::from(Decimal::from_str("29.99").unwrap());
        assert_eq!(money.to_string(), "$29.99");

        let money = Money::from(Decimal::from_str("89.97").unwrap());
        assert_eq!(money.to_string(), "$89.97");

        let money = Money::from(Decimal::from_str("10.006").unwrap());
        assert_eq!(money.to_string(), "$10.01");
    }

    #[test]
    fn zero_displays_as_zero_dollars() {
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }
}
