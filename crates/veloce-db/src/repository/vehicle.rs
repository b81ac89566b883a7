//! # Vehicle Repository
//!
//! Database operations for the rental catalog.
//!
//! ## Row ⇄ Domain Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  vehicles table (snake_case)          Vehicle (domain)              │
//! │                                                                     │
//! │  price_per_day  INTEGER      ──────►  price_per_day: i64            │
//! │  category       TEXT         ──────►  category: VehicleCategory     │
//! │  discount_rules TEXT (JSON)  ──────►  discount_rules: Vec<Rule>     │
//! │  is_available   INTEGER      ──────►  is_available: bool            │
//! │                                                                     │
//! │  Every column is mapped explicitly; an unrepresentable value        │
//! │  surfaces as DbError::CorruptColumn instead of being dropped.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Paths
//! - Public catalog: `list_available`, creation time ascending
//! - Admin back office: `list_all`, creation time descending
//!
//! Callers should not depend on order beyond "stable for given inputs".

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use veloce_core::{DiscountRule, Vehicle, VehicleCategory};

// =============================================================================
// Record Key
// =============================================================================

/// Explicit new-vs-existing tag for a catalog write.
///
/// The storage layer historically told records apart by identifier length
/// alone (a persisted UUID is long, a fresh form submits a short or empty
/// id). That heuristic survives as [`RecordKey::classify`] at the request
/// boundary; everywhere past it the intent is carried by this enum, never
/// re-derived from string length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    /// No persisted record yet; a UUID will be generated on insert.
    New,
    /// A persisted record with this identifier.
    Existing(String),
}

impl RecordKey {
    /// Identifier lengths above this are treated as persisted UUIDs.
    const PERSISTED_ID_MIN_LEN: usize = 11;

    /// Classifies a raw identifier string coming off the wire.
    ///
    /// Length ≤ 10 ⇒ `New`, length ≥ 11 ⇒ `Existing`. UUID v4 strings are
    /// 36 characters, so every persisted key classifies as existing.
    pub fn classify(id: &str) -> RecordKey {
        let id = id.trim();
        if id.len() >= Self::PERSISTED_ID_MIN_LEN {
            RecordKey::Existing(id.to_string())
        } else {
            RecordKey::New
        }
    }
}

/// Generates a new catalog record identifier.
pub fn generate_vehicle_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Storage Row
// =============================================================================

/// Raw storage row. Mapped to [`Vehicle`] via [`VehicleRow::into_domain`].
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: String,
    name: String,
    name_ar: Option<String>,
    category: String,
    price_per_day: i64,
    horsepower: i64,
    acceleration: f64,
    top_speed: i64,
    image_url: Option<String>,
    is_available: bool,
    available_today: bool,
    description: Option<String>,
    description_ar: Option<String>,
    discount_rules: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl VehicleRow {
    fn into_domain(self) -> DbResult<Vehicle> {
        let category = VehicleCategory::from_str(&self.category)
            .map_err(|reason| DbError::corrupt("category", &self.id, reason))?;

        let discount_rules: Vec<DiscountRule> = serde_json::from_str(&self.discount_rules)
            .map_err(|e| DbError::corrupt("discount_rules", &self.id, e.to_string()))?;

        Ok(Vehicle {
            id: self.id,
            name: self.name,
            name_ar: self.name_ar,
            category,
            price_per_day: self.price_per_day,
            horsepower: self.horsepower,
            acceleration: self.acceleration,
            top_speed: self.top_speed,
            image_url: self.image_url,
            is_available: self.is_available,
            available_today: self.available_today,
            description: self.description,
            description_ar: self.description_ar,
            discount_rules,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "\
    id, name, name_ar, category, price_per_day, horsepower, acceleration, \
    top_speed, image_url, is_available, available_today, description, \
    description_ar, discount_rules, created_at, updated_at";

// =============================================================================
// Repository
// =============================================================================

/// Repository for vehicle catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = VehicleRepository::new(pool);
/// let catalog = repo.list_available().await?;
/// let car = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VehicleRepository { pool }
    }

    /// Lists vehicles visible to visitors, creation time ascending.
    pub async fn list_available(&self) -> DbResult<Vec<Vehicle>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM vehicles WHERE is_available = 1 ORDER BY created_at ASC"
        );
        let rows: Vec<VehicleRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        debug!(count = rows.len(), "Listed available vehicles");
        rows.into_iter().map(VehicleRow::into_domain).collect()
    }

    /// Lists every vehicle for the admin back office, newest first.
    pub async fn list_all(&self) -> DbResult<Vec<Vehicle>> {
        let sql =
            format!("SELECT {SELECT_COLUMNS} FROM vehicles ORDER BY created_at DESC");
        let rows: Vec<VehicleRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        rows.into_iter().map(VehicleRow::into_domain).collect()
    }

    /// Gets a vehicle by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Vehicle))` - Vehicle found
    /// * `Ok(None)` - Vehicle not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Vehicle>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM vehicles WHERE id = ?1");
        let row: Option<VehicleRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(VehicleRow::into_domain).transpose()
    }

    /// Saves a vehicle, routing on the explicit record key.
    ///
    /// ## Returns
    /// The persisted vehicle, including the generated id on insert.
    pub async fn save(&self, vehicle: &Vehicle, key: RecordKey) -> DbResult<Vehicle> {
        match key {
            RecordKey::New => self.insert(vehicle).await,
            RecordKey::Existing(id) => {
                let mut updated = vehicle.clone();
                updated.id = id;
                self.update(&updated).await?;

                // Re-read so the caller sees the persisted updated_at,
                // not the timestamps it sent in.
                self.get_by_id(&updated.id)
                    .await?
                    .ok_or_else(|| DbError::not_found("Vehicle", &updated.id))
            }
        }
    }

    /// Inserts a new vehicle with a freshly generated identifier.
    pub async fn insert(&self, vehicle: &Vehicle) -> DbResult<Vehicle> {
        let mut stored = vehicle.clone();
        stored.id = generate_vehicle_id();
        let now = Utc::now();
        stored.created_at = now;
        stored.updated_at = now;

        debug!(id = %stored.id, name = %stored.name, "Inserting vehicle");

        let rules_json = serde_json::to_string(&stored.discount_rules)
            .map_err(|e| DbError::Internal(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO vehicles (
                id, name, name_ar, category, price_per_day,
                horsepower, acceleration, top_speed, image_url,
                is_available, available_today, description, description_ar,
                discount_rules, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5,
                ?6, ?7, ?8, ?9,
                ?10, ?11, ?12, ?13,
                ?14, ?15, ?16
            )
            "#,
        )
        .bind(&stored.id)
        .bind(&stored.name)
        .bind(&stored.name_ar)
        .bind(stored.category.as_str())
        .bind(stored.price_per_day)
        .bind(stored.horsepower)
        .bind(stored.acceleration)
        .bind(stored.top_speed)
        .bind(&stored.image_url)
        .bind(stored.is_available)
        .bind(stored.available_today)
        .bind(&stored.description)
        .bind(&stored.description_ar)
        .bind(&rules_json)
        .bind(stored.created_at)
        .bind(stored.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(stored)
    }

    /// Updates an existing vehicle.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Vehicle doesn't exist
    pub async fn update(&self, vehicle: &Vehicle) -> DbResult<()> {
        debug!(id = %vehicle.id, "Updating vehicle");

        let rules_json = serde_json::to_string(&vehicle.discount_rules)
            .map_err(|e| DbError::Internal(e.to_string()))?;
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE vehicles SET
                name = ?2,
                name_ar = ?3,
                category = ?4,
                price_per_day = ?5,
                horsepower = ?6,
                acceleration = ?7,
                top_speed = ?8,
                image_url = ?9,
                is_available = ?10,
                available_today = ?11,
                description = ?12,
                description_ar = ?13,
                discount_rules = ?14,
                updated_at = ?15
            WHERE id = ?1
            "#,
        )
        .bind(&vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.name_ar)
        .bind(vehicle.category.as_str())
        .bind(vehicle.price_per_day)
        .bind(vehicle.horsepower)
        .bind(vehicle.acceleration)
        .bind(vehicle.top_speed)
        .bind(&vehicle.image_url)
        .bind(vehicle.is_available)
        .bind(vehicle.available_today)
        .bind(&vehicle.description)
        .bind(&vehicle.description_ar)
        .bind(&rules_json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Vehicle", &vehicle.id));
        }

        Ok(())
    }

    /// Deletes a vehicle.
    ///
    /// Hard delete: booking requests are never persisted, so nothing
    /// references catalog rows.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting vehicle");

        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Vehicle", id));
        }

        Ok(())
    }

    /// Counts catalog records (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
