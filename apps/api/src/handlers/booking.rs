//! Booking submission endpoint.
//!
//! One request carries the whole pipeline: look up the vehicle, compute
//! the quote, validate, dispatch the notification. A submission that
//! fails validation never reaches the network layer.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use veloce_core::pricing::{self, PriceBreakdown};
use veloce_core::validation::{self, BookingInput};
use veloce_core::BookingRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Booking form as submitted by a visitor. Dates arrive as strings;
/// parsing them is part of validation, not deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub vehicle_id: String,
    pub name: String,
    pub phone: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub status: &'static str,
    pub breakdown: PriceBreakdown,
}

/// `POST /api/bookings`
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(submission): Json<BookingSubmission>,
) -> Result<Json<BookingResponse>, ApiError> {
    let vehicle = state
        .db
        .vehicles()
        .get_by_id(&submission.vehicle_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Vehicle", &submission.vehicle_id))?;

    // Quote with whatever parses; the validator reports missing or
    // malformed dates with a proper field-level reason afterwards.
    let start = validation::parse_date("start date", &submission.start_date).ok();
    let end = validation::parse_date("end date", &submission.end_date).ok();
    let breakdown = pricing::quote(start, end, vehicle.price_per_day, &vehicle.discount_rules);

    let input = BookingInput {
        name: &submission.name,
        phone: &submission.phone,
        start_date: &submission.start_date,
        end_date: &submission.end_date,
    };
    let (start, end) = validation::validate_booking(&input, breakdown.as_ref())?;

    // Validation guarantees the breakdown exists past this point.
    let breakdown = breakdown.ok_or_else(|| ApiError::internal("quote vanished"))?;

    let booking = BookingRequest {
        vehicle_id: submission.vehicle_id,
        name: submission.name,
        phone: submission.phone,
        start_date: start,
        end_date: end,
        breakdown: Some(breakdown),
    };

    state.dispatcher.dispatch_booking(&booking, &vehicle).await?;

    info!(vehicle = %vehicle.name, days = breakdown.day_count, "Booking submitted");
    Ok(Json(BookingResponse {
        status: "sent",
        breakdown,
    }))
}
