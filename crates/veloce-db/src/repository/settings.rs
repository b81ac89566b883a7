//! # Settings Repository
//!
//! Key-value store for operator-tunable configuration that must survive
//! restarts: messaging credentials and the admin passphrase hash.
//!
//! ## Known Keys
//! Use the constants in [`keys`] instead of string literals so every call
//! site agrees on spelling.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Well-known settings keys.
pub mod keys {
    /// SHA-256 hex digest of the shared admin passphrase.
    pub const ADMIN_PASSWORD_HASH: &str = "admin_password_hash";

    /// Bot token for the outbound messaging endpoint.
    pub const BOT_TOKEN: &str = "telegram_bot_token";

    /// Target chat identifier for dispatched notifications.
    pub const CHAT_ID: &str = "telegram_chat_id";
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the persistent settings table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Gets a setting value.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key never set
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Sets a setting value, inserting or overwriting.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, "Storing setting");

        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a setting. No error if the key was never set.
    pub async fn delete(&self, key: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM settings WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_get_unset_key_is_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.settings().get(keys::BOT_TOKEN).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.settings();

        repo.set(keys::CHAT_ID, "-100123456").await.unwrap();
        assert_eq!(
            repo.get(keys::CHAT_ID).await.unwrap().as_deref(),
            Some("-100123456")
        );
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.settings();

        repo.set(keys::BOT_TOKEN, "first").await.unwrap();
        repo.set(keys::BOT_TOKEN, "second").await.unwrap();
        assert_eq!(
            repo.get(keys::BOT_TOKEN).await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.settings();

        repo.set(keys::ADMIN_PASSWORD_HASH, "abc123").await.unwrap();
        repo.delete(keys::ADMIN_PASSWORD_HASH).await.unwrap();
        repo.delete(keys::ADMIN_PASSWORD_HASH).await.unwrap();
        assert!(repo.get(keys::ADMIN_PASSWORD_HASH).await.unwrap().is_none());
    }
}
