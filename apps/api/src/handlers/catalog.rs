//! Public catalog read endpoints.

use axum::extract::{Path, State};
use axum::Json;

use crate::dto::VehicleDto;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/vehicles` — listed vehicles, oldest first.
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleDto>>, ApiError> {
    let vehicles = state.db.vehicles().list_available().await?;
    Ok(Json(vehicles.into_iter().map(Into::into).collect()))
}

/// `GET /api/vehicles/{id}` — one vehicle by id.
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleDto>, ApiError> {
    let vehicle = state
        .db
        .vehicles()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Vehicle", &id))?;

    Ok(Json(vehicle.into()))
}
