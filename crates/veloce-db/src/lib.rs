//! # veloce-db: Database Layer for Veloce
//!
//! This crate provides database access for the Veloce rental platform.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Veloce Data Flow                             │
//! │                                                                     │
//! │  API handler (list_vehicles, admin save, ...)                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   veloce-db (THIS CRATE)                      │ │
//! │  │                                                               │ │
//! │  │  ┌─────────────┐  ┌────────────────┐  ┌──────────────┐       │ │
//! │  │  │  Database   │  │  Repositories  │  │  Migrations  │       │ │
//! │  │  │  (pool.rs)  │  │ (vehicle.rs)   │  │  (embedded)  │       │ │
//! │  │  │             │◄─│ (settings.rs)  │  │ 001_init.sql │       │ │
//! │  │  └─────────────┘  └────────────────┘  └──────────────┘       │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │                      SQLite database file                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Catalog and settings repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use veloce_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/veloce.db")).await?;
//! let vehicles = db.vehicles().list_available().await?;
//! let token = db.settings().get(veloce_db::settings_keys::BOT_TOKEN).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::settings::{keys as settings_keys, SettingsRepository};
pub use repository::vehicle::{RecordKey, VehicleRepository};
