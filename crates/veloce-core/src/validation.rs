//! # Validation Module
//!
//! Input validation for booking submissions and catalog writes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend                                                  │
//! │  ├── Basic format checks (empty fields, submit button state)        │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: API handler (Rust)                                        │
//! │  ├── Type validation (deserialization)                              │
//! │  └── THIS MODULE: business rule validation                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  └── NOT NULL / CHECK constraints                                   │
//! │                                                                     │
//! │  A booking that fails here never reaches the network layer.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::pricing::PriceBreakdown;
use crate::types::Vehicle;
use crate::MAX_FIELD_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Raw, untrusted booking form input as submitted by a visitor.
///
/// Dates arrive as strings because the form sends whatever the visitor
/// typed or picked; parsing is part of validation.
#[derive(Debug, Clone)]
pub struct BookingInput<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a free-text contact field (name, phone).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not exceed MAX_FIELD_LENGTH
pub fn validate_contact_field(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_FIELD_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LENGTH,
        });
    }

    Ok(())
}

/// Parses a rental date in ISO `YYYY-MM-DD` form.
///
/// Empty input reports a missing field; anything unparseable reports an
/// invalid format. No time-of-day semantics.
pub fn parse_date(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Booking Submission
// =============================================================================

/// Decides whether a booking submission may proceed.
///
/// ## Rules
/// - non-empty name and phone
/// - both dates present and parseable
/// - start date ≤ end date (inverted ranges are rejected, not reordered)
/// - a computed breakdown must exist (pricing succeeded)
///
/// ## Returns
/// The parsed date pair on success, so the caller never re-parses.
pub fn validate_booking(
    input: &BookingInput<'_>,
    breakdown: Option<&PriceBreakdown>,
) -> ValidationResult<(NaiveDate, NaiveDate)> {
    validate_contact_field("name", input.name)?;
    validate_contact_field("phone", input.phone)?;

    let start = parse_date("start date", input.start_date)?;
    let end = parse_date("end date", input.end_date)?;

    if start > end {
        return Err(ValidationError::InvertedDateRange);
    }

    if breakdown.is_none() {
        return Err(ValidationError::MissingBreakdown);
    }

    Ok((start, end))
}

// =============================================================================
// Catalog Writes
// =============================================================================

/// Validates a vehicle record before an administrator save.
///
/// ## Rules
/// - non-empty display name
/// - price_per_day > 0
/// - performance figures non-negative
/// - each discount rule: days ≥ 0 and 0 ≤ percent ≤ 100
pub fn validate_vehicle(vehicle: &Vehicle) -> ValidationResult<()> {
    validate_contact_field("name", &vehicle.name)?;

    if vehicle.price_per_day <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "pricePerDay".to_string(),
        });
    }

    if vehicle.horsepower < 0 || vehicle.top_speed < 0 || vehicle.acceleration < 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "specs".to_string(),
        });
    }

    for rule in &vehicle.discount_rules {
        if rule.days < 0 {
            return Err(ValidationError::OutOfRange {
                field: "discountRules.days".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }
        if rule.percent > 100 {
            return Err(ValidationError::OutOfRange {
                field: "discountRules.percent".to_string(),
                min: 0,
                max: 100,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::quote;
    use crate::types::{DiscountRule, VehicleCategory};
    use chrono::Utc;

    fn sample_input<'a>() -> BookingInput<'a> {
        BookingInput {
            name: "Omar",
            phone: "+971500000000",
            start_date: "2026-05-01",
            end_date: "2026-05-04",
        }
    }

    fn sample_breakdown() -> PriceBreakdown {
        let start = NaiveDate::from_ymd_opt(2026, 5, 1);
        let end = NaiveDate::from_ymd_opt(2026, 5, 4);
        quote(start, end, 1000, &[]).unwrap()
    }

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: String::new(),
            name: "Huracán Evo".to_string(),
            name_ar: None,
            category: VehicleCategory::Sport,
            price_per_day: 1200,
            horsepower: 640,
            acceleration: 2.9,
            top_speed: 325,
            image_url: None,
            is_available: true,
            available_today: true,
            description: None,
            description_ar: None,
            discount_rules: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_booking_passes() {
        let breakdown = sample_breakdown();
        let (start, end) = validate_booking(&sample_input(), Some(&breakdown)).unwrap();
        assert_eq!(start.to_string(), "2026-05-01");
        assert_eq!(end.to_string(), "2026-05-04");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = sample_input();
        input.name = "  ";
        let breakdown = sample_breakdown();
        assert_eq!(
            validate_booking(&input, Some(&breakdown)),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_empty_phone_rejected() {
        let mut input = sample_input();
        input.phone = "";
        let breakdown = sample_breakdown();
        assert!(validate_booking(&input, Some(&breakdown)).is_err());
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let mut input = sample_input();
        input.start_date = "next tuesday";
        let breakdown = sample_breakdown();
        assert!(matches!(
            validate_booking(&input, Some(&breakdown)),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_inverted_range_rejected_not_reordered() {
        let mut input = sample_input();
        input.start_date = "2026-05-04";
        input.end_date = "2026-05-01";
        let breakdown = sample_breakdown();
        assert_eq!(
            validate_booking(&input, Some(&breakdown)),
            Err(ValidationError::InvertedDateRange)
        );
    }

    #[test]
    fn test_same_day_range_allowed() {
        let mut input = sample_input();
        input.start_date = "2026-05-01";
        input.end_date = "2026-05-01";
        let breakdown = sample_breakdown();
        assert!(validate_booking(&input, Some(&breakdown)).is_ok());
    }

    #[test]
    fn test_missing_breakdown_rejected() {
        assert_eq!(
            validate_booking(&sample_input(), None),
            Err(ValidationError::MissingBreakdown)
        );
    }

    #[test]
    fn test_vehicle_validation() {
        assert!(validate_vehicle(&sample_vehicle()).is_ok());

        let mut free = sample_vehicle();
        free.price_per_day = 0;
        assert!(validate_vehicle(&free).is_err());

        let mut over = sample_vehicle();
        over.discount_rules = vec![DiscountRule { days: 3, percent: 101 }];
        assert!(validate_vehicle(&over).is_err());

        let mut negative = sample_vehicle();
        negative.discount_rules = vec![DiscountRule { days: -1, percent: 10 }];
        assert!(validate_vehicle(&negative).is_err());
    }
}
