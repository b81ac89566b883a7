//! Concierge chat proxy endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::concierge::ChatMessage;
use crate::state::AppState;

/// The client sends its entire history every turn; the server keeps none.
#[derive(Debug, Deserialize)]
pub struct ConciergeRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ConciergeResponse {
    pub reply: String,
}

/// `POST /api/concierge`
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ConciergeRequest>,
) -> Result<Json<ConciergeResponse>, ApiError> {
    if request.messages.is_empty() {
        return Err(ApiError::validation("messages must not be empty"));
    }

    let reply = state.concierge.complete(&request.messages).await?;
    Ok(Json(ConciergeResponse { reply }))
}
