use std::env;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use dotenvy::dotenv;
use thiserror::Error;

#[derive(Clone)]
pub struct Config {
    access_private_key_pem: Vec<u8>,
    access_public_key_pem: Vec<u8>,
    access_ttl_seconds: i64,
    refresh_private_key_pem: Vec<u8>,
    refresh_public_key_pem: Vec<u8>,
    refresh_ttl_seconds: i64,
    redis_host: String,
    default_role: String,
}

impl Config {
    pub fn access_private_key_pem(&self) -> &[u8] {
        &self.access_private_key_pem
    }
    pub fn access_public_key_pem(&self) -> &[u8] {
        &self.access_public_key_pem
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_private_key_pem(&self) -> &[u8] {
        &self.refresh_private_key_pem
    }
    pub fn refresh_public_key_pem(&self) -> &[u8] {
        &self.refresh_public_key_pem
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn redis_host(&self) -> &str {
        &self.redis_host
    }
    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    pub fn default() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let access_private_key_pem = pem_var("ACCESS_PRIVATE_KEY_B64")?;
        let access_public_key_pem = pem_var("ACCESS_PUBLIC_KEY_B64")?;
        let refresh_private_key_pem = pem_var("REFRESH_PRIVATE_KEY_B64")?;
        let refresh_public_key_pem = pem_var("REFRESH_PUBLIC_KEY_B64")?;

        let access_ttl_seconds = parse_i64("ACCESS_TTL_SECONDS")?;
        let refresh_ttl_seconds = parse_i64("REFRESH_TTL_SECONDS")?;
        if access_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid("ACCESS_TTL_SECONDS must be positive"));
        }
        if refresh_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid("REFRESH_TTL_SECONDS must be positive"));
        }

        let redis_host = opt_var("REDIS_HOST").unwrap_or_else(|| "127.0.0.1:6379".into());
        let default_role = opt_var("DEFAULT_ROLE").unwrap_or_else(|| "user".into());

        Ok(Self {
            access_private_key_pem,
            access_public_key_pem,
            access_ttl_seconds,
            refresh_private_key_pem,
            refresh_public_key_pem,
            refresh_ttl_seconds,
            redis_host,
            default_role,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64(key: &'static str) -> Result<i64, ConfigError> {
    let v = req_var(key)?;
    v.parse::<i64>().map_err(|_| ConfigError::Invalid(key))
}

// Key material arrives as base64-wrapped PEM so it survives .env files and
// container env blocks without newline mangling.
fn pem_var(key: &'static str) -> Result<Vec<u8>, ConfigError> {
    let raw = req_var(key)?;
    let pem = decode_b64_any(&raw).map_err(|_| ConfigError::Decode(key))?;
    if !pem.starts_with(b"-----BEGIN") {
        return Err(ConfigError::Invalid(key));
    }
    Ok(pem)
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}
