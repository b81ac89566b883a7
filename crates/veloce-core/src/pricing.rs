//! # Pricing Engine
//!
//! Computes an itemized price breakdown for a prospective rental.
//!
//! ## Quote Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Visitor picks dates on the booking form                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  day_count(start, end)  ← inclusive span, order-independent         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  pre_discount_total = day_count × price_per_day                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  discount::resolve(day_count, rules)  ← default tiers if none       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  PriceBreakdown { days, total, percent, amount, final }             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a pure function: identical inputs always yield an identical
//! breakdown, and it never caches - the breakdown is recomputed from current
//! inputs on every call. When any input is unusable it yields `None` rather
//! than a zero or garbage total; callers treat that as "not computable".
//!
//! Inverted date ranges are deliberately NOT an engine concern: the day count
//! uses the absolute difference so operand order does not matter, and the
//! Booking Request Validator is the one that rejects start > end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::discount;
use crate::money::Money;
use crate::types::DiscountRule;
use crate::DEFAULT_DISCOUNT_RULES;

// =============================================================================
// Price Breakdown
// =============================================================================

/// The computed quote for one prospective booking.
///
/// Derived, never stored: always recomputed from current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Inclusive rental length in days.
    pub day_count: i64,

    /// day_count × price_per_day, before any discount.
    pub pre_discount_total: Money,

    /// Applied discount percentage (0 when no tier qualifies).
    pub discount_percent: u32,

    /// Discounted amount, rounded half-up.
    pub discount_amount: Money,

    /// What the renter actually pays.
    pub final_total: Money,
}

// =============================================================================
// Day Count
// =============================================================================

/// Inclusive count of calendar days spanned by two dates.
///
/// Uses the absolute difference so operand order does not matter:
/// `day_count(a, b) == day_count(b, a)`, and `day_count(d, d) == 1`.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

// =============================================================================
// Quote
// =============================================================================

/// Produces a price breakdown, or `None` when the inputs make no quote
/// possible.
///
/// ## Not-computable conditions
/// - either date is absent
/// - `price_per_day` is not positive
///
/// ## Discount policy
/// An empty rule list falls back to [`DEFAULT_DISCOUNT_RULES`]
/// (>3 → 10%, >5 → 15%, >15 → 20%); the resolver picks the largest percent
/// among strictly exceeded thresholds.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use veloce_core::pricing::quote;
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
///
/// let breakdown = quote(Some(start), Some(end), 1000, &[]).unwrap();
/// assert_eq!(breakdown.day_count, 16);
/// assert_eq!(breakdown.final_total.units(), 12800);
/// ```
pub fn quote(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    price_per_day: i64,
    rules: &[DiscountRule],
) -> Option<PriceBreakdown> {
    let (start, end) = (start?, end?);
    if price_per_day <= 0 {
        return None;
    }

    let days = day_count(start, end);
    let daily = Money::from_units(price_per_day);
    let pre_discount_total = daily.multiply_days(days);

    let effective_rules: &[DiscountRule] = if rules.is_empty() {
        &DEFAULT_DISCOUNT_RULES
    } else {
        rules
    };
    let discount_percent = discount::resolve(days, effective_rules);
    let discount_amount = pre_discount_total.round_percent(discount_percent);

    Some(PriceBreakdown {
        day_count: days,
        pre_discount_total,
        discount_percent,
        discount_amount,
        final_total: pre_discount_total - discount_amount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
