use serde::{Deserialize, Serialize};

use super::Identity;

/// The identity subset that gets baked into freshly issued tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPayload {
    pub user_id: i32,
    pub username: String,
    pub roles: Vec<String>,
}

impl From<&Identity> for TokenPayload {
    fn from(identity: &Identity) -> Self {
        TokenPayload {
            user_id: identity.id,
            username: identity.name.clone(),
            roles: identity.roles.clone(),
        }
    }
}

impl From<&TokenClaims> for TokenPayload {
    fn from(claims: &TokenClaims) -> Self {
        TokenPayload {
            user_id: claims.sub,
            username: claims.name.clone(),
            roles: claims.roles.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: i32,           // Subject (user ID)
    pub name: String,       // Username
    pub roles: Vec<String>, // Role names, in assignment order
    pub jti: String,        // Token ID
    pub iat: i64,           // Issued at time
    pub exp: i64,           // Expiration time
}
