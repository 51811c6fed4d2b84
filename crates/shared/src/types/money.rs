//! Money type with fixed two-decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` and is only ever built from
//! decimal text or from values read back out of the database.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of fractional digits stored and rendered for every amount.
pub const MONEY_SCALE: u32 = 2;

/// Errors raised while parsing decimal text into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The text is not a plain decimal number.
    #[error("'{0}' is not a decimal number")]
    NotANumber(String),

    /// The text carries more fractional digits than the ledger stores.
    #[error("'{0}' has more than two decimal places")]
    TooPrecise(String),
}

/// A monetary amount in the ledger's single currency.
///
/// Renders with exactly two decimal places (`"60.00"`), both through
/// `Display` and through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Parses decimal text such as `"100"` or `"40.50"`.
    ///
    /// Scientific notation, surrounding whitespace and more than two
    /// significant fractional digits are rejected. Trailing zeros beyond the
    /// second place (`"1.500"`) are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError`] if the text is not a decimal number or is too
    /// precise.
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        let value = Decimal::from_str_exact(text)
            .map_err(|_| MoneyError::NotANumber(text.to_string()))?;

        if value.normalize().scale() > MONEY_SCALE {
            return Err(MoneyError::TooPrecise(text.to_string()));
        }

        Ok(Self(value))
    }

    /// Wraps an already-validated decimal, e.g. a balance read from storage.
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
