//! # Notification Dispatcher
//!
//! Delivers booking and callback submissions to the operator's chat channel.
//!
//! ## Dispatch Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Notification Dispatch                            │
//! │                                                                     │
//! │  Submission ──► resolve credentials ──► format text ──► POST        │
//! │                      │                                    │         │
//! │                      │ missing token or chat id           │         │
//! │                      ▼                                    ▼         │
//! │                 NotConfigured                    2xx ⇒ delivered    │
//! │              (no network attempt)            non-2xx ⇒ Rejected     │
//! │                                            no response ⇒ Network    │
//! │                                                                     │
//! │  Exactly zero or one outbound call per submission. No retries,      │
//! │  no queue: failure is reported to the caller and the submission     │
//! │  is gone.                                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Credential Resolution
//! The settings table is consulted first so operators can rotate
//! credentials at runtime; the startup environment value is the fallback.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use veloce_core::{BookingRequest, CallbackRequest, Vehicle};
use veloce_db::{settings_keys, SettingsRepository};

// =============================================================================
// Errors
// =============================================================================

/// Why a dispatch did not reach the chat channel.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Bot token or chat id missing everywhere. No network call was made.
    #[error("notification channel is not configured")]
    NotConfigured,

    /// The messaging endpoint answered with a non-success status.
    #[error("messaging endpoint rejected the request: HTTP {status}")]
    Rejected { status: u16, body: String },

    /// The messaging endpoint could not be reached at all.
    #[error("messaging endpoint unreachable: {0}")]
    Network(String),
}

// =============================================================================
// Transport Seam
// =============================================================================

/// Outbound message transport.
///
/// The dispatcher formats and decides; the transport only moves bytes.
/// Tests substitute a recording double to assert exact call counts —
/// in particular that rejected submissions produce ZERO calls.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, token: &str, chat_id: &str, text: &str) -> Result<(), DispatchError>;
}

/// Production transport: HTTPS POST to the Telegram Bot API.
pub struct TelegramTransport {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramTransport {
    /// Creates a transport against the public Bot API.
    pub fn new() -> Result<Self, DispatchError> {
        Self::with_base_url("https://api.telegram.org")
    }

    /// Creates a transport against an alternate base URL (test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        Ok(TelegramTransport {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl MessageTransport for TelegramTransport {
    async fn send(&self, token: &str, chat_id: &str, text: &str) -> Result<(), DispatchError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, token);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the endpoint's body for the logs; the caller maps it
            // to a non-technical message before it reaches the visitor.
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Message Formatting
// =============================================================================

/// Formats the chat message for a booking submission.
///
/// Deterministic: same inputs, byte-identical output. Field order is
/// fixed; the discount line appears only when a discount applied; a
/// missing breakdown renders "not calculated" rather than a number.
pub fn format_booking_message(booking: &BookingRequest, vehicle: &Vehicle) -> String {
    let mut lines = vec![
        "New booking request".to_string(),
        String::new(),
        format!("Car: {} ({})", vehicle.name, vehicle.category.label()),
        format!("Daily rate: {}", vehicle.price()),
        format!("Name: {}", booking.name),
        format!("Phone: {}", booking.phone),
        format!("From: {}", booking.start_date),
        format!("To: {}", booking.end_date),
    ];

    match &booking.breakdown {
        Some(b) => {
            lines.push(format!("Days: {}", b.day_count));
            if b.discount_percent > 0 {
                lines.push(format!(
                    "Discount: {}% (-{})",
                    b.discount_percent, b.discount_amount
                ));
            }
            lines.push(format!("Total: {}", b.final_total));
        }
        None => lines.push("Total: not calculated".to_string()),
    }

    lines.join("\n")
}

/// Formats the chat message for a callback or chauffeur request.
pub fn format_callback_message(request: &CallbackRequest) -> String {
    let mut lines = vec![
        request.kind.label().to_string(),
        String::new(),
        format!("Name: {}", request.name),
        format!("Phone: {}", request.phone),
    ];

    if let Some(details) = request.details.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!("Details: {}", details.trim()));
    }

    lines.join("\n")
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Resolves credentials, formats the message and hands it to the transport.
#[derive(Clone)]
pub struct NotificationDispatcher {
    settings: SettingsRepository,
    transport: Arc<dyn MessageTransport>,
    fallback_token: Option<String>,
    fallback_chat_id: Option<String>,
}

impl NotificationDispatcher {
    pub fn new(
        settings: SettingsRepository,
        transport: Arc<dyn MessageTransport>,
        fallback_token: Option<String>,
        fallback_chat_id: Option<String>,
    ) -> Self {
        NotificationDispatcher {
            settings,
            transport,
            fallback_token,
            fallback_chat_id,
        }
    }

    /// Dispatches a booking notification. At most one outbound call.
    pub async fn dispatch_booking(
        &self,
        booking: &BookingRequest,
        vehicle: &Vehicle,
    ) -> Result<(), DispatchError> {
        let text = format_booking_message(booking, vehicle);
        self.dispatch(&text).await?;

        info!(vehicle = %vehicle.name, "Booking notification delivered");
        Ok(())
    }

    /// Dispatches a callback/chauffeur notification.
    pub async fn dispatch_callback(&self, request: &CallbackRequest) -> Result<(), DispatchError> {
        let text = format_callback_message(request);
        self.dispatch(&text).await?;

        info!(kind = ?request.kind, "Callback notification delivered");
        Ok(())
    }

    async fn dispatch(&self, text: &str) -> Result<(), DispatchError> {
        let (token, chat_id) = self.resolve_credentials().await?;

        debug!(chars = text.len(), "Dispatching chat notification");
        self.transport.send(&token, &chat_id, text).await
    }

    /// Settings table first, startup config second. Either one missing
    /// fails fast before any network traffic.
    ///
    /// Each source is checked for emptiness on its own: a present-but-blank
    /// stored value counts as unset and does not mask the startup fallback.
    async fn resolve_credentials(&self) -> Result<(String, String), DispatchError> {
        let token = self
            .stored_credential(settings_keys::BOT_TOKEN)
            .await
            .or_else(|| non_empty(self.fallback_token.clone()));
        let chat_id = self
            .stored_credential(settings_keys::CHAT_ID)
            .await
            .or_else(|| non_empty(self.fallback_chat_id.clone()));

        match (token, chat_id) {
            (Some(token), Some(chat_id)) => Ok((token, chat_id)),
            _ => Err(DispatchError::NotConfigured),
        }
    }

    /// Reads one credential from the settings store. A store failure is
    /// logged and treated as unset, so the startup fallback still applies.
    async fn stored_credential(&self, key: &str) -> Option<String> {
        match self.settings.get(key).await {
            Ok(value) => non_empty(value),
            Err(e) => {
                warn!(key = %key, error = %e,
                    "Settings store read failed, falling back to startup credentials");
                None
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Test Support
// =============================================================================

/// Transport double shared by unit and router tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every outbound call instead of sending it.
    pub struct RecordingTransport {
        pub calls: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingTransport {
        pub fn new() -> Arc<Self> {
            Arc::new(RecordingTransport {
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MessageTransport for RecordingTransport {
        async fn send(
            &self,
            token: &str,
            chat_id: &str,
            text: &str,
        ) -> Result<(), DispatchError> {
            self.calls.lock().unwrap().push((
                token.to_string(),
                chat_id.to_string(),
                text.to_string(),
            ));
            Ok(())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
