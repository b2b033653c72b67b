use crate::models::RecentUser;
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;

/// Recently looked-up developers, newest first
///
/// Bounded by `capacity`; the least recently looked-up user is evicted first.
/// Usernames are compared case-insensitively.
pub struct RecentUsers {
    users: Mutex<LruCache<String, RecentUser>>,
}

impl RecentUsers {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            users: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Record a lookup, moving the user to the front
    pub async fn record(&self, username: &str, avatar: &str) {
        let entry = RecentUser {
            username: username.to_string(),
            avatar: avatar.to_string(),
            timestamp: chrono::Utc::now(),
        };

        let mut users = self.users.lock().await;
        users.put(username.to_ascii_lowercase(), entry);
        tracing::trace!("Recorded recent user {} ({} tracked)", username, users.len());
    }

    /// Most recent lookups first, at most `limit`
    pub async fn list(&self, limit: usize) -> Vec<RecentUser> {
        let users = self.users.lock().await;
        users.iter().take(limit).map(|(_, user)| user.clone()).collect()
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}
