//! Session lifecycle service.
//!
//! Coordinates the four account/session operations and the authorization
//! check built on top of them:
//! - `sign_up`: store a new identity with a salted credential hash
//! - `login`: verify credentials, issue an access + refresh token pair
//! - `refresh_access_token`: mint a further access token off a live refresh
//!   token
//! - `logout`: drop the access token's session record
//! - `authorize`: full acceptance check for an access token
//!
//! Revocation model:
//! 1. Every issued token gets a session record (`token_id -> user_id`) in the
//!    session cache, expiring with the token.
//! 2. A token is honored only while its record exists; deleting the record
//!    revokes the token regardless of remaining validity.
//! 3. Access and refresh tokens sign with distinct RSA key pairs, so one kind
//!    never validates as the other.
//!
//! Concurrency: all operations take `&self`; mutual exclusion lives inside
//! the store handles, and write locks are held only across single store
//! calls, never across signing work.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey};
use log::{info, warn};

use crate::domain::{
    CredentialStoreError, CredentialStoreHandle, IssuedToken, NewIdentity, SessionCacheHandle,
    TokenClaims, TokenPair, TokenPayload,
};
use crate::errors::SessionError;
use crate::utils::config::{Config, ConfigError};
use crate::utils::password::{generate_salt, hash_password, verify_password};
use crate::utils::token;

/// Signing/verification material and lifetime for one token purpose.
///
/// Access and refresh tokens each get their own instance, keeping key pairs
/// and TTLs independent.
#[derive(Clone)]
pub struct TokenCredential {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenCredential {
    /// Parse an RSA key pair from PEM bytes. Keys are parsed once here, not
    /// per issued token.
    pub fn from_rsa_pem(
        private_key_pem: &[u8],
        public_key_pem: &[u8],
        ttl: Duration,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        Ok(Self {
            encoding_key: EncodingKey::from_rsa_pem(private_key_pem)?,
            decoding_key: DecodingKey::from_rsa_pem(public_key_pem)?,
            ttl,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

#[derive(Clone)]
pub struct SessionService {
    credentials: CredentialStoreHandle,
    sessions: SessionCacheHandle,
    access: TokenCredential,
    refresh: TokenCredential,
    default_role: String,
}

impl SessionService {
    pub fn new(
        credentials: CredentialStoreHandle,
        sessions: SessionCacheHandle,
        access: TokenCredential,
        refresh: TokenCredential,
        default_role: String,
    ) -> Self {
        Self {
            credentials,
            sessions,
            access,
            refresh,
            default_role,
        }
    }

    /// Build both token credentials from the environment-backed `Config`.
    pub fn from_config(
        config: &Config,
        credentials: CredentialStoreHandle,
        sessions: SessionCacheHandle,
    ) -> Result<Self, ConfigError> {
        let access = TokenCredential::from_rsa_pem(
            config.access_private_key_pem(),
            config.access_public_key_pem(),
            Duration::seconds(config.access_ttl_seconds()),
        )
        .map_err(|_| ConfigError::Invalid("ACCESS key material is not a usable RSA PEM pair"))?;

        let refresh = TokenCredential::from_rsa_pem(
            config.refresh_private_key_pem(),
            config.refresh_public_key_pem(),
            Duration::seconds(config.refresh_ttl_seconds()),
        )
        .map_err(|_| ConfigError::Invalid("REFRESH key material is not a usable RSA PEM pair"))?;

        Ok(Self::new(
            credentials,
            sessions,
            access,
            refresh,
            config.default_role().to_owned(),
        ))
    }

    /// Register a new identity under the configured default role.
    ///
    /// Errors:
    /// - `AlreadyExists` if the name is taken (checked up front, and again by
    ///   the store on insert to cover a lost race)
    /// - `Backend` if the default role cannot be resolved or the store fails
    pub async fn sign_up(&self, name: &str, password: &str) -> Result<(), SessionError> {
        {
            let store = self.credentials.read().await;
            match store.find_by_name(name).await {
                Ok(_) => return Err(SessionError::AlreadyExists),
                Err(CredentialStoreError::NotFound) => {}
                Err(e) => return Err(SessionError::backend(e)),
            }
        }

        // A missing default role is a deployment defect, not a user error.
        let role = {
            let store = self.credentials.read().await;
            store
                .find_role_by_name(&self.default_role)
                .await
                .map_err(SessionError::backend)?
        };

        let salt = generate_salt();
        let password_hash = hash_password(password, &salt);
        let identity = NewIdentity::new(name.to_owned(), salt, password_hash, vec![role.name]);

        let created = {
            let mut store = self.credentials.write().await;
            store.create(identity).await
        };
        match created {
            Ok(identity) => {
                info!("registered user {} (id {})", identity.name, identity.id);
                Ok(())
            }
            Err(CredentialStoreError::AlreadyExists) => Err(SessionError::AlreadyExists),
            Err(e) => Err(SessionError::backend(e)),
        }
    }

    /// Verify credentials and issue a fresh access + refresh pair, recording
    /// a session record for each.
    ///
    /// Existing sessions for the user stay untouched; concurrent logins each
    /// get independent pairs.
    ///
    /// Errors:
    /// - `InvalidCredentials` for an unknown name or a wrong password, with
    ///   no way to tell the two apart
    /// - `Backend` for store, cache, or signing failures
    pub async fn login(&self, name: &str, password: &str) -> Result<TokenPair, SessionError> {
        let identity = {
            let store = self.credentials.read().await;
            match store.find_by_name(name).await {
                Ok(identity) => identity,
                Err(CredentialStoreError::NotFound) => {
                    warn!("login rejected for {}: unknown user", name);
                    return Err(SessionError::InvalidCredentials);
                }
                Err(e) => return Err(SessionError::backend(e)),
            }
        };

        if !verify_password(password, &identity.salt, &identity.password_hash) {
            warn!("login rejected for {}: wrong password", name);
            return Err(SessionError::InvalidCredentials);
        }

        let payload = TokenPayload::from(&identity);
        let access = token::issue(&payload, self.access.ttl(), self.access.encoding_key())
            .map_err(SessionError::backend)?;
        let refresh = token::issue(&payload, self.refresh.ttl(), self.refresh.encoding_key())
            .map_err(SessionError::backend)?;

        self.store_session_record(&access).await?;
        self.store_session_record(&refresh).await?;

        info!("issued session tokens for user id {}", identity.id);
        Ok(TokenPair { access, refresh })
    }

    /// Mint a further access token off a structurally valid, still-live
    /// refresh token.
    ///
    /// Access tokens issued earlier stay valid; nothing is rotated or
    /// revoked here.
    ///
    /// Errors:
    /// - `InvalidToken` if the refresh token fails signature, expiry, or
    ///   decoding
    /// - `Revoked` if it verifies but its session record is gone
    /// - `Backend` for cache or signing failures
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<IssuedToken, SessionError> {
        let claims = token::validate(refresh_token, self.refresh.decoding_key())
            .map_err(SessionError::InvalidToken)?;

        let record = {
            let cache = self.sessions.read().await;
            cache
                .get(&claims.jti)
                .await
                .map_err(SessionError::backend)?
        };
        if record.is_none() {
            warn!(
                "refresh rejected for user id {}: session {} revoked",
                claims.sub, claims.jti
            );
            return Err(SessionError::Revoked);
        }

        let payload = TokenPayload::from(&claims);
        let access = token::issue(&payload, self.access.ttl(), self.access.encoding_key())
            .map_err(SessionError::backend)?;
        self.store_session_record(&access).await?;

        info!("refreshed access token for user id {}", access.user_id);
        Ok(access)
    }

    /// Drop the access token's session record so `authorize` starts refusing
    /// it. Idempotent: logging out an already-dead session succeeds.
    ///
    /// The refresh token parameter is currently unused; its session record
    /// stays live until its TTL runs out, so refreshing keeps working after
    /// logout.
    pub async fn logout(
        &self,
        _refresh_token: &str,
        access_token_id: &str,
    ) -> Result<(), SessionError> {
        let mut cache = self.sessions.write().await;
        cache
            .delete(access_token_id)
            .await
            .map_err(SessionError::backend)?;

        info!("logged out session {}", access_token_id);
        Ok(())
    }

    /// Full acceptance check for an access token: verified signature,
    /// unexpired, and a live session record for its token ID.
    pub async fn authorize(&self, access_token: &str) -> Result<TokenClaims, SessionError> {
        let claims = token::validate(access_token, self.access.decoding_key())
            .map_err(SessionError::InvalidToken)?;

        let record = {
            let cache = self.sessions.read().await;
            cache
                .get(&claims.jti)
                .await
                .map_err(SessionError::backend)?
        };
        if record.is_none() {
            return Err(SessionError::Revoked);
        }

        Ok(claims)
    }

    /// Record `token` as a live session. TTL is the token's remaining
    /// lifetime, clamped to one second so the record always outlives the
    /// instant of insertion.
    async fn store_session_record(&self, token: &IssuedToken) -> Result<(), SessionError> {
        let ttl = remaining_seconds(token.expires_at);
        let mut cache = self.sessions.write().await;
        cache
            .set(&token.token_id, &token.user_id.to_string(), ttl)
            .await
            .map_err(SessionError::backend)
    }
}

fn remaining_seconds(expires_at: DateTime<Utc>) -> usize {
    let remaining = (expires_at - Utc::now()).num_seconds();
    if remaining < 1 {
        1
    } else {
        remaining as usize
    }
}
