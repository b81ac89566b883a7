//! # Error Types
//!
//! Domain-specific error types for veloce-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  veloce-core errors (this file)                                     │
//! │  └── ValidationError  - Booking / catalog input failures            │
//! │                                                                     │
//! │  veloce-db errors (separate crate)                                  │
//! │  └── DbError          - Catalog / settings store failures           │
//! │                                                                     │
//! │  API errors (in app)                                                │
//! │  └── ApiError         - What the site frontend sees (serialized)    │
//! │                                                                     │
//! │  Flow: ValidationError / DbError → ApiError → Frontend              │
//! │                                                                     │
//! │  "Not computable" is not an error here: the pricing engine returns  │
//! │  Option::None and the validator turns its absence into              │
//! │  MissingBreakdown at submission time.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//! 4. Validation errors never trigger network traffic

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before anything leaves the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Start date falls after end date. The range is rejected, never
    /// silently reordered.
    #[error("start date must not be after end date")]
    InvertedDateRange,

    /// Submission attempted without a computed price breakdown.
    #[error("price must be calculated before submission")]
    MissingBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================
