//! # veloce-core: Pure Business Logic for Veloce
//!
//! This crate is the **heart** of the Veloce rental platform. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Veloce Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    HTTP API (apps/api)                        │ │
//! │  │   catalog routes ──► booking submit ──► admin actions         │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ veloce-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐         │ │
//! │  │  │  types  │ │  money  │ │ pricing  │ │ validation │         │ │
//! │  │  │ Vehicle │ │  Money  │ │ discount │ │   rules    │         │ │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └────────────┘         │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                  veloce-db (Database Layer)                   │ │
//! │  │          SQLite catalog + settings, migrations                │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, DiscountRule, BookingRequest, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Rental quote computation (day count, totals)
//! - [`discount`] - Discount tier resolution policy
//! - [`validation`] - Booking and catalog input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole currency units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use veloce_core::Money` instead of
// `use veloce_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use pricing::PriceBreakdown;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default discount tiers applied when a vehicle carries no rules of its own.
///
/// ## Policy
/// Thresholds are exclusive: a rental qualifies for a tier only when its day
/// count is strictly greater than `days`. Among qualifying tiers the largest
/// percentage wins; tiers never stack.
pub const DEFAULT_DISCOUNT_RULES: [types::DiscountRule; 3] = [
    types::DiscountRule { days: 3, percent: 10 },
    types::DiscountRule { days: 5, percent: 15 },
    types::DiscountRule { days: 15, percent: 20 },
];

/// Maximum length accepted for free-text fields (names, phone, details).
///
/// ## Business Reason
/// Everything a visitor types ends up inside a single outbound chat message;
/// capping field length keeps that message within the channel's limits.
pub const MAX_FIELD_LENGTH: usize = 500;
