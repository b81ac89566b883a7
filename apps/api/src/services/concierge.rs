//! # Concierge Chat Proxy
//!
//! Forwards visitor chat to an external language-model endpoint and
//! returns the reply. Content generation stays out of process; this
//! module only moves messages.
//!
//! ## Session Model
//! The full message history is a value carried in every request. The
//! server holds no session state between requests: two concurrent chats
//! cannot see each other, and a restart loses nothing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::error;

/// A single turn of the chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `user` or `assistant`; the proxy does not interpret roles.
    pub role: String,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConciergeError {
    /// Endpoint URL or API key missing from configuration.
    #[error("concierge endpoint is not configured")]
    NotConfigured,

    /// The endpoint answered with a non-success status.
    #[error("concierge endpoint rejected the request: HTTP {status}")]
    Rejected { status: u16, body: String },

    /// The endpoint could not be reached, or its reply was unreadable.
    #[error("concierge endpoint unreachable: {0}")]
    Upstream(String),
}

/// Chat completion port. Tests substitute a canned implementation.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ConciergeError>;
}

/// Production model client: OpenAI-style chat completion over HTTPS.
pub struct HttpChatModel {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    model: String,
}

impl HttpChatModel {
    pub fn new(
        api_url: Option<String>,
        api_key: Option<String>,
        model: String,
    ) -> Result<Self, ConciergeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ConciergeError::Upstream(e.to_string()))?;

        Ok(HttpChatModel {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl ChatModel for HttpChatModel {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ConciergeError> {
        let (url, key) = match (self.api_url.as_deref(), self.api_key.as_deref()) {
            (Some(url), Some(key)) => (url, key),
            _ => return Err(ConciergeError::NotConfigured),
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(key)
            .json(&json!({
                "model": self.model,
                "messages": messages,
            }))
            .send()
            .await
            .map_err(|e| ConciergeError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConciergeError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ConciergeError::Upstream(e.to_string()))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                error!("Concierge reply missing expected content field");
                ConciergeError::Upstream("malformed completion response".to_string())
            })
    }
}

/// Model double shared by unit and router tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Replies with a fixed string, recording nothing.
    pub struct CannedChatModel {
        pub reply: String,
    }

    #[async_trait]
    impl ChatModel for CannedChatModel {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, ConciergeError> {
            Ok(self.reply.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_model_fails_fast() {
        let model = HttpChatModel::new(None, None, "test-model".to_string()).unwrap();
        let err = model
            .complete(&[ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }])
            .await
            .unwrap_err();

        assert!(matches!(err, ConciergeError::NotConfigured));
    }

    #[test]
    fn test_message_serialization_shape() {
        let message = ChatMessage {
            role: "assistant".to_string(),
            content: "Welcome to Veloce".to_string(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "Welcome to Veloce");
    }
}
