//! Callback and chauffeur request endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use veloce_core::validation::validate_contact_field;
use veloce_core::{CallbackKind, CallbackRequest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackSubmission {
    pub kind: CallbackKind,
    pub name: String,
    pub phone: String,
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub status: &'static str,
}

/// `POST /api/callbacks`
pub async fn submit_callback(
    State(state): State<AppState>,
    Json(submission): Json<CallbackSubmission>,
) -> Result<Json<CallbackResponse>, ApiError> {
    validate_contact_field("name", &submission.name)?;
    validate_contact_field("phone", &submission.phone)?;

    let request = CallbackRequest {
        kind: submission.kind,
        name: submission.name,
        phone: submission.phone,
        details: submission.details,
    };

    state.dispatcher.dispatch_callback(&request).await?;

    info!(kind = ?request.kind, "Callback submitted");
    Ok(Json(CallbackResponse { status: "sent" }))
}
