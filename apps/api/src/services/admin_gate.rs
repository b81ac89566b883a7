//! # Admin Auth Gate
//!
//! Shared-passphrase gate in front of every privileged operation.
//!
//! ## Model
//! One passphrase, shared by the operators. The server stores only its
//! SHA-256 hex digest in the settings table; until an operator sets one,
//! a hard-coded bootstrap digest applies. No accounts, no sessions, no
//! tokens: every privileged request carries the passphrase and is checked
//! BEFORE its payload is looked at.

use sha2::{Digest, Sha256};
use tracing::warn;

use veloce_db::{settings_keys, DbResult, SettingsRepository};

/// SHA-256 hex digest of the bootstrap passphrase (`veloce2024`).
/// Active only until `admin_password_hash` is set in the settings table.
const BOOTSTRAP_PASSWORD_HASH: &str =
    "b7f2818863e4989fcb74f0253f146638fd9d0bcd5d0ee10e9f87a526e4d314c4";

/// Returns the SHA-256 hex digest of a passphrase.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Gate guarding privileged operations.
#[derive(Clone)]
pub struct AdminGate {
    settings: SettingsRepository,
}

impl AdminGate {
    pub fn new(settings: SettingsRepository) -> Self {
        AdminGate { settings }
    }

    /// Checks a candidate passphrase against the stored digest.
    ///
    /// ## Returns
    /// `true` only on an exact digest match. A database failure while
    /// reading the stored digest counts as a failed check.
    pub async fn verify_password(&self, candidate: &str) -> bool {
        let stored = match self.settings.get(settings_keys::ADMIN_PASSWORD_HASH).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Could not read stored admin hash, denying");
                return false;
            }
        };

        let expected = stored.as_deref().unwrap_or(BOOTSTRAP_PASSWORD_HASH);
        hash_password(candidate) == expected
    }

    /// Replaces the stored passphrase digest.
    pub async fn set_password(&self, new_password: &str) -> DbResult<()> {
        self.settings
            .set(settings_keys::ADMIN_PASSWORD_HASH, &hash_password(new_password))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veloce_db::{Database, DbConfig};

    #[test]
    fn test_hash_is_lowercase_hex() {
        let digest = hash_password("veloce2024");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, BOOTSTRAP_PASSWORD_HASH);
    }

    #[tokio::test]
    async fn test_bootstrap_password_accepted_until_replaced() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let gate = AdminGate::new(db.settings());

        assert!(gate.verify_password("veloce2024").await);
        assert!(!gate.verify_password("wrong").await);

        gate.set_password("new-secret").await.unwrap();
        assert!(!gate.verify_password("veloce2024").await);
        assert!(gate.verify_password("new-secret").await);
    }

    #[tokio::test]
    async fn test_empty_candidate_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let gate = AdminGate::new(db.settings());
        assert!(!gate.verify_password("").await);
    }
}
