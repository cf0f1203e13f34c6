//! Type-safe price representation in integer minor units.
//!
//! All cart arithmetic is exact integer addition and multiplication; the
//! only place decimal formatting appears is display, which goes through
//! `rusty_money` so currencies with and without subunits both render
//! correctly (CLP has none, USD has two).

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};

/// Monetary amount in the smallest unit of its currency.
///
/// The currency itself is configuration, not data: the backend prices
/// everything in a single shop currency, so `Price` carries only the
/// amount and is paired with a [`Currency`] at display time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount in minor units.
    #[must_use]
    pub const fn from_minor(amount: i64) -> Self {
        Self(amount)
    }

    /// The amount in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as i64)
    }

    /// Format the amount for display in the given currency.
    #[must_use]
    pub fn display(self, currency: Currency) -> String {
        Money::from_minor(self.0, currency.iso()).to_string()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Shop currency.
///
/// The backend serves Chilean pesos; other codes exist so the display
/// layer is not hard-wired to a zero-subunit currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Chilean peso (no subunits).
    #[default]
    Clp,
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Clp => "CLP",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Number of decimal places in the minor unit.
    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Clp => 0,
            Self::Usd | Self::Eur => 2,
        }
    }

    const fn iso(self) -> &'static iso::Currency {
        match self {
            Self::Clp => iso::CLP,
            Self::Usd => iso::USD,
            Self::Eur => iso::EUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_exact_integer() {
        let unit = Price::from_minor(4990);
        assert_eq!(unit.times(2).minor(), 9980);
        assert_eq!((unit + Price::from_minor(10)).minor(), 5000);

        let total: Price = [unit, unit, Price::from_minor(5490)].into_iter().sum();
        assert_eq!(total.minor(), 15470);
    }

    #[test]
    fn clp_displays_without_subunits() {
        let price = Price::from_minor(4990);
        let shown = price.display(Currency::Clp);
        assert!(shown.contains("4"), "unexpected format: {shown}");
        assert!(!shown.contains(",99"), "CLP must not show cents: {shown}");
    }

    #[test]
    fn serde_is_transparent_integer() {
        let price = Price::from_minor(5990);
        assert_eq!(serde_json::to_string(&price).expect("serialize"), "5990");
        let back: Price = serde_json::from_str("5990").expect("deserialize");
        assert_eq!(back, price);
    }
}
