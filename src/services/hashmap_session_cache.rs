use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{SessionCache, SessionCacheError};

struct CacheEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory session cache with per-entry deadlines. Expired entries read as
/// misses; nothing prunes them eagerly. A ttl of 0 expires immediately.
pub struct HashmapSessionCache {
    entries: HashMap<String, CacheEntry>,
}

impl HashmapSessionCache {
    pub fn new() -> Self {
        HashmapSessionCache {
            entries: HashMap::new(),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for HashmapSessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SessionCache for HashmapSessionCache {
    async fn set(
        &mut self,
        key: &str,
        value: &str,
        ttl_seconds: usize,
    ) -> Result<(), SessionCacheError> {
        let expires_at = Utc::now() + Duration::seconds(ttl_seconds as i64);
        self.entries.insert(
            key.to_owned(),
            CacheEntry {
                value: value.to_owned(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SessionCacheError> {
        Ok(self
            .entries
            .get(key)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.value.clone()))
    }

    async fn delete(&mut self, key: &str) -> Result<bool, SessionCacheError> {
        Ok(self.entries.remove(key).is_some())
    }
}
