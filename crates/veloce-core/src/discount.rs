//! # Discount Rule Resolver
//!
//! The single place where the "largest discount among exceeded thresholds"
//! policy lives.
//!
//! ## Resolution Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  resolve(day_count = 6, rules = [>3 → 10%, >5 → 15%, >15 → 20%])    │
//! │                                                                     │
//! │  >3  days: 6 > 3  ✓ qualifies at 10%                                │
//! │  >5  days: 6 > 5  ✓ qualifies at 15%                                │
//! │  >15 days: 6 > 15 ✗ does not qualify                                │
//! │                                                                     │
//! │  Winner: 15% (largest qualifying percent, no stacking)              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Thresholds are strict: a 3-day rental does NOT qualify for a ">3 days"
//! tier. Rules are evaluated by threshold, never by list position.

use crate::types::DiscountRule;

/// Resolves the applicable discount percent for a rental length.
///
/// ## Arguments
/// * `day_count` - Inclusive rental length in days
/// * `rules` - Unordered discount tiers
///
/// ## Returns
/// The largest percent among rules whose threshold is strictly less than
/// `day_count`; 0 when none qualify or the list is empty.
pub fn resolve(day_count: i64, rules: &[DiscountRule]) -> u32 {
    rules
        .iter()
        .filter(|rule| rule.days < day_count)
        .map(|rule| rule.percent)
        .max()
        .unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_DISCOUNT_RULES;

    fn rule(days: i64, percent: u32) -> DiscountRule {
        DiscountRule { days, percent }
    }

    #[test]
    fn test_empty_rules_resolve_to_zero() {
        assert_eq!(resolve(30, &[]), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the threshold: does NOT qualify
        assert_eq!(resolve(3, &DEFAULT_DISCOUNT_RULES), 0);
        // One past the threshold: qualifies
        assert_eq!(resolve(4, &DEFAULT_DISCOUNT_RULES), 10);
    }

    #[test]
    fn test_largest_qualifying_percent_wins() {
        assert_eq!(resolve(6, &DEFAULT_DISCOUNT_RULES), 15);
        assert_eq!(resolve(16, &DEFAULT_DISCOUNT_RULES), 20);
    }

    #[test]
    fn test_order_independent() {
        let shuffled = [rule(15, 20), rule(3, 10), rule(5, 15)];
        assert_eq!(resolve(6, &shuffled), 15);
        assert_eq!(resolve(100, &shuffled), 20);
    }

    #[test]
    fn test_ties_are_harmless() {
        let tied = [rule(2, 12), rule(4, 12)];
        assert_eq!(resolve(5, &tied), 12);
    }

    #[test]
    fn test_largest_percent_not_largest_threshold() {
        // A generous low tier beats a stingy high tier
        let odd = [rule(2, 25), rule(10, 5)];
        assert_eq!(resolve(12, &odd), 25);
    }
}
