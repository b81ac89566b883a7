//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: integer whole currency units                         │
//! │    Daily rates are advertised as round amounts (e.g. 1200/day),     │
//! │    so the smallest unit we ever deal in is one whole unit.          │
//! │    Discounts round half-up and the lost fraction is explicit.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of a discount can never underflow silently
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a plain JSON number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a day count.
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0 * days)
    }

    /// Computes a percentage of this amount, rounding half-up.
    ///
    /// ## Rounding
    /// Integer math: `(amount * percent + 50) / 100`. The `+50` term rounds
    /// exact halves upward, so `round_percent(15)` of 150 is 23, not 22.
    /// This is the single rounding rule for every discount in the system.
    ///
    /// ## Example
    /// ```rust
    /// use veloce_core::money::Money;
    ///
    /// let total = Money::from_units(16000);
    /// assert_eq!(total.round_percent(20).units(), 3200);
    /// ```
    pub fn round_percent(&self, percent: u32) -> Money {
        // i128 intermediate prevents overflow on large totals
        let amount = (self.0 as i128 * percent as i128 + 50) / 100;
        Money(amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is the form used inside outbound notification messages; UI display
/// formatting (thousands separators, currency symbol placement) is a
/// frontend concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(1200);
        assert_eq!(money.units(), 1200);
        assert!(money.is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(1200)), "$1200");
        assert_eq!(format!("{}", Money::from_units(0)), "$0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(250);

        assert_eq!((a + b).units(), 1250);
        assert_eq!((a - b).units(), 750);
        assert_eq!((a * 3).units(), 3000);
        assert_eq!(a.multiply_days(16).units(), 16000);
    }

    #[test]
    fn test_round_percent_exact() {
        // 16000 at 20% = 3200, no rounding needed
        let total = Money::from_units(16000);
        assert_eq!(total.round_percent(20).units(), 3200);
    }

    #[test]
    fn test_round_percent_half_up() {
        // 150 at 15% = 22.5 → rounds up to 23
        let total = Money::from_units(150);
        assert_eq!(total.round_percent(15).units(), 23);

        // 149 at 15% = 22.35 → rounds down to 22
        let total = Money::from_units(149);
        assert_eq!(total.round_percent(15).units(), 22);
    }

    #[test]
    fn test_round_percent_zero() {
        let total = Money::from_units(9999);
        assert_eq!(total.round_percent(0).units(), 0);
    }
}
