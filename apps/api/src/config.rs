//! API server configuration.
//!
//! Configuration is loaded from environment variables exactly once at
//! process start. Several credentials accept more than one variable name
//! for compatibility with older deployments; the lookup order is fixed
//! here and nowhere else — call sites receive the already-resolved value.

use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port.
    pub http_port: u16,

    /// Path to the SQLite database file.
    pub database_path: String,

    /// Bot token for the messaging endpoint.
    ///
    /// Lookup order: `TELEGRAM_BOT_TOKEN`, then `BOT_TOKEN`. A value stored
    /// in the settings table takes precedence over both at dispatch time.
    pub bot_token: Option<String>,

    /// Target chat for dispatched notifications.
    ///
    /// Lookup order: `TELEGRAM_CHAT_ID`, then `CHAT_ID`. Settings-table
    /// value wins at dispatch time.
    pub chat_id: Option<String>,

    /// Base URL of the language-model chat completion endpoint.
    pub concierge_api_url: Option<String>,

    /// API key for the language-model endpoint.
    ///
    /// Lookup order: `CONCIERGE_API_KEY`, then `OPENROUTER_API_KEY`.
    pub concierge_api_key: Option<String>,

    /// Model identifier sent with every concierge request.
    pub concierge_model: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "veloce.db".to_string()),

            bot_token: first_env(&["TELEGRAM_BOT_TOKEN", "BOT_TOKEN"]),

            chat_id: first_env(&["TELEGRAM_CHAT_ID", "CHAT_ID"]),

            concierge_api_url: env::var("CONCIERGE_API_URL").ok(),

            concierge_api_key: first_env(&["CONCIERGE_API_KEY", "OPENROUTER_API_KEY"]),

            concierge_model: env::var("CONCIERGE_MODEL")
                .unwrap_or_else(|_| "openai/gpt-4o-mini".to_string()),
        };

        Ok(config)
    }
}

/// Returns the first set, non-empty variable among `names`.
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_env_skips_unset_and_empty() {
        // Process env in tests is shared; use names nothing else sets.
        env::set_var("VELOCE_TEST_EMPTY", "");
        env::set_var("VELOCE_TEST_SET", "value");

        assert_eq!(
            first_env(&["VELOCE_TEST_UNSET", "VELOCE_TEST_EMPTY", "VELOCE_TEST_SET"]),
            Some("value".to_string())
        );
        assert_eq!(first_env(&["VELOCE_TEST_UNSET"]), None);
    }
}
