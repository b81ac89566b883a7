//! # Domain Types
//!
//! Core domain types used throughout Veloce.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐  │
//! │  │    Vehicle      │   │  BookingRequest  │   │ CallbackRequest │  │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │  │
//! │  │  id (UUID)      │   │  vehicle_id      │   │  name           │  │
//! │  │  name           │   │  name / phone    │   │  phone          │  │
//! │  │  category       │   │  dates           │   │  details        │  │
//! │  │  price_per_day  │   │  breakdown       │   │  kind           │  │
//! │  │  discount_rules │   └──────────────────┘   └─────────────────┘  │
//! │  └─────────────────┘                                               │
//! │                                                                     │
//! │  Vehicle is persisted; booking and callback requests are            │
//! │  ephemeral - they live exactly as long as one dispatch.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::pricing::PriceBreakdown;

// =============================================================================
// Vehicle Category
// =============================================================================

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Sport,
    Suv,
    Sedan,
    Convertible,
}

impl VehicleCategory {
    /// Human-readable label used in outbound notification messages.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Sport => "Sport",
            VehicleCategory::Suv => "SUV",
            VehicleCategory::Sedan => "Sedan",
            VehicleCategory::Convertible => "Convertible",
        }
    }

    /// Storage-layer representation (lowercase, matches the serde form).
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Sport => "sport",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Sedan => "sedan",
            VehicleCategory::Convertible => "convertible",
        }
    }
}

impl std::str::FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sport" => Ok(VehicleCategory::Sport),
            "suv" => Ok(VehicleCategory::Suv),
            "sedan" => Ok(VehicleCategory::Sedan),
            "convertible" => Ok(VehicleCategory::Convertible),
            other => Err(format!("unknown vehicle category: {other}")),
        }
    }
}

// =============================================================================
// Discount Rule
// =============================================================================

/// A discount tier: "rentals longer than `days` days get `percent` off".
///
/// ## Invariants
/// - `days >= 0`, `0 <= percent <= 100` (enforced by catalog validation)
/// - The set of rules is unordered on input; resolution goes by threshold,
///   never by list position.
/// - Thresholds are exclusive: a day count equal to `days` does NOT qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Threshold in days. Strictly exceeded ⇒ the rule applies.
    pub days: i64,
    /// Discount percentage off the pre-discount total.
    pub percent: u32,
}

// =============================================================================
// Vehicle
// =============================================================================

/// A rentable car in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier (UUID v4), stable once persisted.
    pub id: String,

    /// Display name shown in the catalog and in notifications.
    pub name: String,

    /// Optional secondary-locale display name.
    pub name_ar: Option<String>,

    /// Catalog category.
    pub category: VehicleCategory,

    /// Daily rate in whole currency units. Always positive.
    pub price_per_day: i64,

    /// Engine power in horsepower.
    pub horsepower: i64,

    /// 0-100 km/h time in seconds.
    pub acceleration: f64,

    /// Top speed in km/h.
    pub top_speed: i64,

    /// Reference to the hero image (upload/storage handled elsewhere).
    pub image_url: Option<String>,

    /// Whether the vehicle is listed at all.
    pub is_available: bool,

    /// Whether the vehicle can be picked up today.
    pub available_today: bool,

    /// Free-text description.
    pub description: Option<String>,

    /// Optional secondary-locale description.
    pub description_ar: Option<String>,

    /// Per-vehicle discount tiers. Empty ⇒ default tiers apply.
    pub discount_rules: Vec<DiscountRule>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Returns the daily rate as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price_per_day)
    }
}

// =============================================================================
// Booking Request
// =============================================================================

/// A visitor's booking submission.
///
/// Ephemeral: constructed at submission time, validated, dispatched once to
/// the notification channel, then discarded. Success and failure both
/// terminate its lifecycle; there is no retry queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Catalog identifier of the requested vehicle.
    pub vehicle_id: String,

    /// Renter's name.
    pub name: String,

    /// Renter's phone number.
    pub phone: String,

    /// First rental day.
    pub start_date: NaiveDate,

    /// Last rental day (inclusive).
    pub end_date: NaiveDate,

    /// Computed quote. Absent when pricing failed; the validator rejects
    /// submission in that case.
    pub breakdown: Option<PriceBreakdown>,
}

// =============================================================================
// Callback Request
// =============================================================================

/// What the visitor is asking for in a non-booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackKind {
    /// "Call me back" request from the contact form.
    Callback,
    /// Chauffeur service request.
    Chauffeur,
}

impl CallbackKind {
    pub fn label(&self) -> &'static str {
        match self {
            CallbackKind::Callback => "Callback request",
            CallbackKind::Chauffeur => "Chauffeur request",
        }
    }
}

/// A callback or chauffeur request. Carries only contact details and
/// free text; no pricing is involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackRequest {
    pub kind: CallbackKind,
    pub name: String,
    pub phone: String,
    pub details: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(VehicleCategory::Sport.label(), "Sport");
        assert_eq!(VehicleCategory::Suv.label(), "SUV");
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&VehicleCategory::Convertible).unwrap();
        assert_eq!(json, "\"convertible\"");

        let parsed: VehicleCategory = serde_json::from_str("\"suv\"").unwrap();
        assert_eq!(parsed, VehicleCategory::Suv);
    }

    #[test]
    fn test_callback_kind_labels() {
        assert_eq!(CallbackKind::Callback.label(), "Callback request");
        assert_eq!(CallbackKind::Chauffeur.label(), "Chauffeur request");
    }
}
