//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    89.90 * 3 = 269.70000000000005  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    8990 * 3 = 26970 centavos = R$ 269,70  ✅                            │
//! │                                                                         │
//! │  Cart totals must equal the sum of their lines EXACTLY, so every       │
//! │  price is stored in the smallest currency unit.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inkstudio_core::money::Money;
//!
//! let price = Money::from_cents(8990);          // R$ 89,90
//! let parsed: Money = "89.90".parse().unwrap(); // catalog input
//! assert_eq!(price, parsed);
//!
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.cents(), 26970);
//! ```
//!
//! Arithmetic saturates at the `i64` bounds instead of panicking, so cart
//! math is total for every input the reducer can see.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos for BRL).
///
/// ## Where Money is Used
/// ```text
/// ProductRef.unit_price ──► CartEntry.line_total ──► CartState.total_price
///                                                          │
///                                                          ▼
///                                                  OrderDraft.subtotal
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use inkstudio_core::money::Money;
    ///
    /// let price = Money::from_cents(2990); // R$ 29,90
    /// assert_eq!(price.cents(), 2990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use inkstudio_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2990);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 5980);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the value with an explicit currency symbol and decimal separator.
    ///
    /// ```rust
    /// use inkstudio_core::money::Money;
    ///
    /// let price = Money::from_cents(26970);
    /// assert_eq!(price.format_with("R$", ','), "R$ 269,70");
    /// assert_eq!(price.format_with("US$", '.'), "US$ 269.70");
    /// ```
    pub fn format_with(&self, symbol: &str, separator: char) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{} {}{}{:02}",
            sign,
            symbol,
            self.major().unsigned_abs(),
            separator,
            self.minor()
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal price as supplied by catalog fixtures.
///
/// Accepts `.` or `,` as the decimal separator and at most two fractional
/// digits: `"89.90"`, `"89,9"`, `"89"` and `"-5.50"` are valid; `"89.999"`,
/// `"89."`, `"R$ 10"` and `""` are not.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major, minor) = match digits.split_once(|c| c == '.' || c == ',') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number"));
        }
        if digits.len() != major.len() && (minor.is_empty() || minor.len() > 2) {
            return Err(invalid("expected one or two decimal places"));
        }
        if !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number"));
        }

        let major: i64 = major.parse().map_err(|_| invalid("value is too large"))?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("expected a decimal number"))? * 10,
            _ => minor.parse().map_err(|_| invalid("expected a decimal number"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("value is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders in the storefront's default currency (BRL).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("R$", ','))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
