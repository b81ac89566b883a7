//! HTTP handlers, one module per route group.

pub mod admin;
pub mod booking;
pub mod callback;
pub mod catalog;
pub mod concierge;
pub mod health;
