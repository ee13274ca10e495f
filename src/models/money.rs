//! Money type for representing rounded currency amounts
//!
//! Calculations run on raw `f64` amounts; a `Money` value is what comes out
//! the other end, already rounded to whole cents. Internally stores cents
//! (i64) so a rounded amount can never pick up extra decimal places.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Magnitude from which an `f64` holds no fraction of a cent
const MAX_FRACTIONAL_CENTS: f64 = 4_503_599_627_370_496.0;

/// A monetary amount rounded to cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use jobcost::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_f64(), 10.5);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Round a raw amount to two decimal places
    ///
    /// Ties round half away from zero, judged on the exact binary value of
    /// `amount`. `0.125` is a true tie and becomes `0.13` (`-0.125` becomes
    /// `-0.13`). `0.015`, `1.005` and `2.675` are all stored just below the
    /// tie and round down.
    ///
    /// # Examples
    /// ```
    /// use jobcost::models::Money;
    /// assert_eq!(Money::from_amount(1739.9999999999998).cents(), 174000);
    /// assert_eq!(Money::from_amount(-400.0).cents(), -40000);
    /// assert_eq!(Money::from_amount(2.675).cents(), 267);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        let scaled = amount * 100.0;
        // Past 2^52 every f64 is already a whole number of cents.
        if !scaled.is_finite() || scaled.abs() >= MAX_FRACTIONAL_CENTS {
            return Self(scaled as i64);
        }

        // `amount * 100.0` is itself rounded and can land on a tie the exact
        // product never reaches. The fused multiply-add rounds once, so its
        // sign is the sign of the exact distance from the tie.
        let floor = scaled.floor();
        let tie = floor + 0.5;
        let distance = amount.mul_add(100.0, -tie);
        let cents = if distance > 0.0 || (distance == 0.0 && tie > 0.0) {
            floor + 1.0
        } else {
            floor
        };
        Self(cents as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal number, e.g. for a spreadsheet cell
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

// Exports carry amounts as decimal numbers, not cents.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Money::from_amount)
    }
}
