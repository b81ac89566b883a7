//! Admin endpoints: catalog mutations and settings writes.
//!
//! Every request carries the shared admin passphrase and is checked
//! BEFORE the payload is looked at — a wrong passphrase with a valid
//! payload performs zero writes.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use veloce_core::validation::validate_vehicle;
use veloce_core::Vehicle;
use veloce_db::{settings_keys, RecordKey};

use crate::dto::VehicleDto;
use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the passphrase on admin reads.
const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

// =============================================================================
// Catalog Reads
// =============================================================================

/// `GET /api/admin/vehicles` — every vehicle, newest first.
pub async fn list_vehicles_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<VehicleDto>>, ApiError> {
    let password = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !state.admin_gate.verify_password(password).await {
        return Err(ApiError::unauthorized());
    }

    let vehicles = state.db.vehicles().list_all().await?;
    Ok(Json(vehicles.into_iter().map(Into::into).collect()))
}

// =============================================================================
// Catalog Mutations
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminAction {
    Save,
    Delete,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminVehicleRequest {
    pub password: String,
    pub action: AdminAction,
    /// Present for `save`.
    pub vehicle: Option<VehicleDto>,
    /// Present for `delete`.
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminVehicleResponse {
    pub status: &'static str,
    pub vehicle: Option<VehicleDto>,
}

/// `POST /api/admin/vehicles`
pub async fn mutate_vehicle(
    State(state): State<AppState>,
    Json(request): Json<AdminVehicleRequest>,
) -> Result<Json<AdminVehicleResponse>, ApiError> {
    if !state.admin_gate.verify_password(&request.password).await {
        return Err(ApiError::unauthorized());
    }

    match request.action {
        AdminAction::Save => {
            let dto = request
                .vehicle
                .ok_or_else(|| ApiError::validation("vehicle payload is required for save"))?;
            let vehicle: Vehicle = dto.into();
            validate_vehicle(&vehicle)?;

            // A short or empty id means the form never saw a persisted
            // record; a full UUID routes to update.
            let key = RecordKey::classify(&vehicle.id);
            let stored = state.db.vehicles().save(&vehicle, key).await?;

            info!(id = %stored.id, name = %stored.name, "Vehicle saved");
            Ok(Json(AdminVehicleResponse {
                status: "saved",
                vehicle: Some(stored.into()),
            }))
        }
        AdminAction::Delete => {
            let id = request
                .id
                .ok_or_else(|| ApiError::validation("id is required for delete"))?;
            state.db.vehicles().delete(&id).await?;

            info!(id = %id, "Vehicle deleted");
            Ok(Json(AdminVehicleResponse {
                status: "deleted",
                vehicle: None,
            }))
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettingsRequest {
    pub password: String,
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdminSettingsResponse {
    pub status: &'static str,
}

/// `POST /api/admin/settings` — upserts delivery credentials and,
/// optionally, rotates the admin passphrase. Absent fields are left
/// untouched.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<AdminSettingsRequest>,
) -> Result<Json<AdminSettingsResponse>, ApiError> {
    if !state.admin_gate.verify_password(&request.password).await {
        return Err(ApiError::unauthorized());
    }

    let settings = state.db.settings();

    // Blank credentials are rejected rather than stored: a stored blank
    // would read as "unset" at dispatch time and silently fall back.
    if let Some(token) = request.bot_token.as_deref() {
        if token.trim().is_empty() {
            return Err(ApiError::validation("bot token must not be empty"));
        }
        settings.set(settings_keys::BOT_TOKEN, token).await?;
    }
    if let Some(chat_id) = request.chat_id.as_deref() {
        if chat_id.trim().is_empty() {
            return Err(ApiError::validation("chat id must not be empty"));
        }
        settings.set(settings_keys::CHAT_ID, chat_id).await?;
    }
    if let Some(new_password) = request.new_password.as_deref() {
        if new_password.trim().is_empty() {
            return Err(ApiError::validation("new password must not be empty"));
        }
        state.admin_gate.set_password(new_password).await?;
    }

    info!("Admin settings updated");
    Ok(Json(AdminSettingsResponse { status: "updated" }))
}
