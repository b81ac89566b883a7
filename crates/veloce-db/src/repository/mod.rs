//! # Repository Module
//!
//! Repository implementations for database access.
//!
//! ## Repository Pattern
//! Each repository owns the SQL for one table and translates between the
//! storage rows (snake_case columns) and the veloce-core domain types.
//! Handlers never see SQL; repositories never see HTTP.

pub mod settings;
pub mod vehicle;

pub use settings::SettingsRepository;
pub use vehicle::VehicleRepository;
