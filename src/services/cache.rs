use crate::models::Profile;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// In-memory profile cache
///
/// Entries expire after the configured TTL so GitHub data is refreshed at
/// most once per window per user. Lookups are case-insensitive.
pub struct ProfileCache {
    profiles: moka::future::Cache<String, Profile>,
    ttl_secs: u64,
}

impl ProfileCache {
    /// Create a new profile cache
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let profiles = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { profiles, ttl_secs }
    }

    /// Get a cached profile
    pub async fn get(&self, username: &str) -> Option<Profile> {
        let key = CacheKey::profile(username);
        let hit = self.profiles.get(&key).await;

        if hit.is_some() {
            tracing::trace!("Profile cache hit: {}", key);
        } else {
            tracing::trace!("Profile cache miss: {}", key);
        }

        hit
    }

    /// Cache a freshly fetched profile under its username
    pub async fn insert(&self, profile: Profile) {
        let key = CacheKey::profile(&profile.username);
        self.profiles.insert(key.clone(), profile).await;
        tracing::trace!("Profile cached: {}", key);
    }

    /// Drop a cached profile
    pub async fn invalidate(&self, username: &str) {
        self.profiles.invalidate(&CacheKey::profile(username)).await;
    }

    /// Apply pending inserts and evictions so `stats` is exact
    pub async fn sync(&self) {
        self.profiles.run_pending_tasks().await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.profiles.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a user profile
    pub fn profile(username: &str) -> String {
        format!("profile:{}", username.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_insert_get() {
        let cache = ProfileCache::new(100, 60);

        cache.insert(Profile::new("Octocat", 8, 42, "Ruby")).await;

        let hit = cache.get("octocat").await.expect("cached profile");
        assert_eq!(hit.username, "Octocat");
        assert!(cache.get("torvalds").await.is_none());

        cache.sync().await;
        assert_eq!(cache.stats().entries, 1);

        cache.invalidate("OCTOCAT").await;
        assert!(cache.get("octocat").await.is_none());
    }

    #[tokio::test]
    async fn test_cache_expires() {
        let cache = ProfileCache::new(100, 1);

        cache.insert(Profile::new("octocat", 8, 42, "Ruby")).await;
        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert!(cache.get("octocat").await.is_none());
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::profile("user123"), "profile:user123");
        assert_eq!(CacheKey::profile("OctoCat"), "profile:octocat");
    }
}
