use redis::{aio::MultiplexedConnection, Client};
use redis::{AsyncCommands, SetExpiry, SetOptions};
use thiserror::Error;

// Small helper to shorten command error mapping
fn command<E: ToString>(e: E) -> RedisServiceError {
    RedisServiceError::Command(e.to_string())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RedisServiceError {
    #[error("error while connecting to instance: {0}")]
    Connection(String),
    #[error("error while running command: {0}")]
    Command(String),
}

/// Thin typed wrapper over a Redis client, limited to the string operations
/// the session cache needs.
pub struct RedisService {
    client: Client,
}

impl RedisService {
    pub fn new(host_url: &str) -> Result<Self, RedisServiceError> {
        let formatted_url = format!("redis://{}/", host_url);
        let client = Client::open(formatted_url)
            .map_err(|e| RedisServiceError::Connection(e.to_string()))?;
        Ok(Self { client })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, RedisServiceError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| RedisServiceError::Connection(e.to_string()))
    }

    pub async fn set_key_value(
        &self,
        key: &str,
        value: &str,
        ttl: usize,
    ) -> Result<(), RedisServiceError> {
        // Clamp TTL to at least 1 second; Redis rejects EX 0
        let ttl = if ttl == 0 { 1 } else { ttl };
        let mut conn = self.get_connection().await?;
        let opts = SetOptions::default().with_expiration(SetExpiry::EX(ttl));
        conn.set_options::<_, _, ()>(key, value, opts)
            .await
            .map_err(command)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, RedisServiceError> {
        let mut conn = self.get_connection().await?;
        conn.get(key).await.map_err(command)
    }

    pub async fn exists(&self, key: &str) -> Result<bool, RedisServiceError> {
        let mut conn = self.get_connection().await?;
        conn.exists(key).await.map_err(command)
    }

    pub async fn delete_key(&self, key: &str) -> Result<bool, RedisServiceError> {
        let mut conn = self.get_connection().await?;
        let deleted: i32 = conn.del(key).await.map_err(command)?;
        Ok(deleted > 0)
    }
}
