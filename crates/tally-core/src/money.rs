//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64 arithmetic:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Catalogue prices arrive as arbitrary JSON decimals, and a run can sum  │
//! │  tens of thousands of contributions. Rounding per record compounds the  │
//! │  error; summing in f64 drifts.                                          │
//! │                                                                         │
//! │  OUR SOLUTION: exact Decimal sums, one rounding step at finalization    │
//! │    19.99 × 3 = 59.97 exactly, every time                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use tally_core::money::Money;
//!
//! let price = Money::new(Decimal::new(1099, 2)); // 10.99
//! let line_total = price * 3;                    // 32.97, exact
//! assert_eq!(line_total.round_2().to_string(), "32.97");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Fractional digits in a finalized total.
pub const MONEY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value backed by exact decimal arithmetic.
///
/// ## Design Decisions
/// - **Decimal (exact)**: catalogue prices are arbitrary JSON decimals and
///   must survive multiplication and summation without drift
/// - **Single field tuple struct**: zero-cost wrapper that keeps all money
///   arithmetic behind one type
/// - **Rounding is explicit**: nothing rounds implicitly; callers finalize a
///   total with [`Money::round_2`]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to two fractional digits, half up (midpoint away from zero).
    ///
    /// The result always carries exactly two fractional digits, so a
    /// finalized total of ten displays as `10.00`.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::money::Money;
    ///
    /// let total = Money::new(Decimal::new(10005, 3)); // 10.005
    /// assert_eq!(total.round_2().to_string(), "10.01");
    /// ```
    pub fn round_2(&self) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(MONEY_SCALE);
        Money(rounded)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw decimal amount; currency formatting is the
/// renderer's concern, not the engine's.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used by the report accumulator.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by an integer quantity (line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Summation of an iterator of Money values.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, item| acc + item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
