//! # API Data Transfer Objects
//!
//! Wire-format types for the HTTP API.
//!
//! ## Naming Boundary
//! Storage columns are snake_case, the JSON API is camelCase. The
//! translation is this one explicit mapping, not a reflective rename:
//! every field appears by name in both directions, and a unit test
//! enumerates the serialized keys so a field added to [`Vehicle`]
//! without a mapping here fails the build or the test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use veloce_core::{DiscountRule, Vehicle, VehicleCategory};

// =============================================================================
// Vehicle DTO
// =============================================================================

/// Vehicle as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: String,
    pub name: String,
    pub name_ar: Option<String>,
    pub category: VehicleCategory,
    pub price_per_day: i64,
    pub horsepower: i64,
    pub acceleration: f64,
    pub top_speed: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub available_today: bool,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub discount_rules: Vec<DiscountRuleDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Discount rule as exposed over the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRuleDto {
    pub days: i64,
    pub percent: u32,
}

impl From<DiscountRule> for DiscountRuleDto {
    fn from(rule: DiscountRule) -> Self {
        DiscountRuleDto {
            days: rule.days,
            percent: rule.percent,
        }
    }
}

impl From<DiscountRuleDto> for DiscountRule {
    fn from(dto: DiscountRuleDto) -> Self {
        DiscountRule {
            days: dto.days,
            percent: dto.percent,
        }
    }
}

impl From<Vehicle> for VehicleDto {
    fn from(v: Vehicle) -> Self {
        VehicleDto {
            id: v.id,
            name: v.name,
            name_ar: v.name_ar,
            category: v.category,
            price_per_day: v.price_per_day,
            horsepower: v.horsepower,
            acceleration: v.acceleration,
            top_speed: v.top_speed,
            image_url: v.image_url,
            is_available: v.is_available,
            available_today: v.available_today,
            description: v.description,
            description_ar: v.description_ar,
            discount_rules: v.discount_rules.into_iter().map(Into::into).collect(),
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

impl From<VehicleDto> for Vehicle {
    fn from(dto: VehicleDto) -> Self {
        Vehicle {
            id: dto.id,
            name: dto.name,
            name_ar: dto.name_ar,
            category: dto.category,
            price_per_day: dto.price_per_day,
            horsepower: dto.horsepower,
            acceleration: dto.acceleration,
            top_speed: dto.top_speed,
            image_url: dto.image_url,
            is_available: dto.is_available,
            available_today: dto.available_today,
            description: dto.description,
            description_ar: dto.description_ar,
            discount_rules: dto.discount_rules.into_iter().map(Into::into).collect(),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: "abc-123".to_string(),
            name: "Continental GT".to_string(),
            name_ar: Some("كونتيننتال".to_string()),
            category: VehicleCategory::Convertible,
            price_per_day: 900,
            horsepower: 650,
            acceleration: 3.6,
            top_speed: 333,
            image_url: Some("https://cdn.example.com/gt.jpg".to_string()),
            is_available: true,
            available_today: false,
            description: Some("Grand tourer".to_string()),
            description_ar: None,
            discount_rules: vec![DiscountRule { days: 5, percent: 15 }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Every domain field must surface under its camelCase name. A field
    /// added to Vehicle without a DTO mapping fails this enumeration.
    #[test]
    fn test_every_field_serializes_camel_case() {
        let dto: VehicleDto = sample_vehicle().into();
        let json = serde_json::to_value(&dto).unwrap();
        let object = json.as_object().unwrap();

        let expected_keys = [
            "id",
            "name",
            "nameAr",
            "category",
            "pricePerDay",
            "horsepower",
            "acceleration",
            "topSpeed",
            "imageUrl",
            "isAvailable",
            "availableToday",
            "description",
            "descriptionAr",
            "discountRules",
            "createdAt",
            "updatedAt",
        ];

        for key in expected_keys {
            assert!(object.contains_key(key), "missing serialized key: {key}");
        }
        assert_eq!(object.len(), expected_keys.len(), "unmapped extra field");

        // Nested rule object is camelCase too
        assert_eq!(json["discountRules"][0]["days"], 5);
        assert_eq!(json["discountRules"][0]["percent"], 15);
        // No snake_case leakage
        assert!(!object.contains_key("price_per_day"));
    }

    #[test]
    fn test_domain_round_trip_preserves_values() {
        let vehicle = sample_vehicle();
        let dto: VehicleDto = vehicle.clone().into();
        let back: Vehicle = dto.into();

        assert_eq!(back.id, vehicle.id);
        assert_eq!(back.price_per_day, vehicle.price_per_day);
        assert_eq!(back.category, vehicle.category);
        assert_eq!(back.discount_rules, vehicle.discount_rules);
        assert_eq!(back.name_ar, vehicle.name_ar);
    }
}
