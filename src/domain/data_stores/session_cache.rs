use super::SessionCacheError;

/// TTL'd key/value records tracking which token IDs still belong to a live
/// session. Deleting a record revokes the matching token no matter how much
/// lifetime it has left.
#[async_trait::async_trait]
pub trait SessionCache: Send + Sync {
    async fn set(
        &mut self,
        key: &str,
        value: &str,
        ttl_seconds: usize,
    ) -> Result<(), SessionCacheError>;
    async fn get(&self, key: &str) -> Result<Option<String>, SessionCacheError>;
    async fn delete(&mut self, key: &str) -> Result<bool, SessionCacheError>;
}
