use async_trait::async_trait;
use log::error;

use crate::domain::{SessionCache, SessionCacheError};
use crate::services::data_stores::redis_service::{RedisService, RedisServiceError};

fn backend(e: RedisServiceError) -> SessionCacheError {
    error!("redis session cache: {}", e);
    SessionCacheError::Backend(e.to_string())
}

/// Redis-backed session cache. Records live as plain string keys with an EX
/// expiry, so Redis itself enforces the TTL side of revocation.
pub struct RedisSessionCache {
    redis_service: RedisService,
}

impl RedisSessionCache {
    pub fn new(redis_service: RedisService) -> Self {
        Self { redis_service }
    }
}

#[async_trait]
impl SessionCache for RedisSessionCache {
    async fn set(
        &mut self,
        key: &str,
        value: &str,
        ttl_seconds: usize,
    ) -> Result<(), SessionCacheError> {
        self.redis_service
            .set_key_value(key, value, ttl_seconds)
            .await
            .map_err(backend)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SessionCacheError> {
        self.redis_service.get(key).await.map_err(backend)
    }

    async fn delete(&mut self, key: &str) -> Result<bool, SessionCacheError> {
        self.redis_service.delete_key(key).await.map_err(backend)
    }
}
