//! Dish prices held as whole cents.
//!
//! Prices arrive as free text from a form field. They are parsed as decimal
//! numbers, rounded to two fractional digits, and stored as integer cents so
//! totals and averages never accumulate floating point error.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing a price from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The text is not a finite decimal number.
    #[error("price '{input}' is not a number")]
    Unparsable {
        /// Raw text supplied for the price.
        input: String,
    },
    /// The amount is below zero.
    #[error("price must not be negative (got '{input}')")]
    Negative {
        /// Raw text supplied for the price.
        input: String,
    },
    /// The amount does not fit in whole cents.
    #[error("price '{input}' is too large")]
    OutOfRange {
        /// Raw text supplied for the price.
        input: String,
    },
    /// The amount is zero or below where a positive amount is required.
    #[error("price must be greater than zero (got '{input}')")]
    NotPositive {
        /// Raw text supplied for the price.
        input: String,
    },
}

/// Exclusive upper bound on a price in cents, `2^64` as an `f64`.
const CENTS_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Non-negative monetary amount with two fractional digits.
///
/// Serialises as a decimal string such as `"45.00"`.
///
/// # Examples
///
/// ```
/// use menu_store::Price;
///
/// let price = Price::parse_positive("60.456").expect("valid price");
/// assert_eq!(price.cents(), 6046);
/// assert_eq!(price.to_string(), "60.46");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Build a price from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount in whole cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse a price that must be strictly greater than zero.
    ///
    /// The positivity check applies to the amount as typed, before rounding
    /// to cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Unparsable`] for text that is not a finite number,
    /// [`PriceError::NotPositive`] for amounts of zero or less, and
    /// [`PriceError::OutOfRange`] for amounts too large to hold in cents.
    pub fn parse_positive(input: &str) -> Result<Self, PriceError> {
        let amount = parse_amount(input)?;
        if amount <= 0.0 {
            return Err(PriceError::NotPositive {
                input: input.to_owned(),
            });
        }
        Self::from_amount(amount, input)
    }

    /// Add two prices, stopping at the largest representable amount.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Mean of `total` over `count` items, rounded half up to the cent.
    ///
    /// Returns [`Price::ZERO`] when `count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use menu_store::Price;
    ///
    /// let total = Price::from_cents(1001);
    /// assert_eq!(Price::average(total, 2), Price::from_cents(501));
    /// assert_eq!(Price::average(total, 0), Price::ZERO);
    /// ```
    #[must_use]
    pub fn average(total: Self, count: usize) -> Self {
        let Ok(divisor) = u128::try_from(count) else {
            return Self::ZERO;
        };
        let doubled_total = u128::from(total.0) * 2 + divisor;
        let rounded = doubled_total.checked_div(divisor * 2).unwrap_or(0);
        Self(u64::try_from(rounded).unwrap_or(u64::MAX))
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "amount is finite and non-negative and the cents are checked against the u64 range"
    )]
    fn from_amount(amount: f64, input: &str) -> Result<Self, PriceError> {
        let cents = (amount * 100.0).round();
        if cents >= CENTS_LIMIT {
            return Err(PriceError::OutOfRange {
                input: input.to_owned(),
            });
        }
        Ok(Self(cents as u64))
    }
}

fn parse_amount(input: &str) -> Result<f64, PriceError> {
    let amount = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PriceError::Unparsable {
            input: input.to_owned(),
        })?;
    if amount < 0.0 {
        return Err(PriceError::Negative {
            input: input.to_owned(),
        });
    }
    Ok(amount)
}

impl FromStr for Price {
    type Err = PriceError;

    /// Parse a non-negative price, rounding to cents.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_amount(parse_amount(value)?, value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0.div_euclid(100), self.0.rem_euclid(100))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Price {
    type Error = PriceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
