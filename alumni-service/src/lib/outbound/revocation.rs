use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::session::ports::RevocationStore;

/// Process-local implementation of the [`RevocationStore`] port.
///
/// Entries are keyed by the token string and carry the token's own expiry;
/// the map is pruned on every write, so it never outgrows the set of
/// still-live revoked tokens. Revocations do not survive a restart and are
/// not shared across instances; a shared key-value store can replace this
/// behind the same port.
pub struct InMemoryRevocationList {
    entries: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryRevocationList {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRevocationList {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationList {
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, expiry| *expiry > now);
        entries.insert(token.to_string(), expires_at);
    }

    async fn is_revoked(&self, token: &str) -> bool {
        let entries = self.entries.read().await;
        match entries.get(token) {
            Some(expiry) => *expiry > Utc::now(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[tokio::test]
    async fn test_revoked_token_is_reported() {
        let list = InMemoryRevocationList::new();

        list.revoke("token-a", Utc::now() + Duration::minutes(15)).await;

        assert!(list.is_revoked("token-a").await);
        assert!(!list.is_revoked("token-b").await);
    }

    #[tokio::test]
    async fn test_entry_dies_with_token_expiry() {
        let list = InMemoryRevocationList::new();

        list.revoke("stale", Utc::now() - Duration::seconds(1)).await;

        assert!(!list.is_revoked("stale").await);
    }

    #[tokio::test]
    async fn test_expired_entries_are_pruned_on_write() {
        let list = InMemoryRevocationList::new();

        list.revoke("stale", Utc::now() - Duration::seconds(1)).await;
        list.revoke("live", Utc::now() + Duration::minutes(15)).await;

        let entries = list.entries.read().await;
        assert!(!entries.contains_key("stale"));
        assert!(entries.contains_key("live"));
    }
}
