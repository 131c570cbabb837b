use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::{IssuedToken, TokenClaims, TokenPayload};
use crate::errors::TokenError;

/// Sign a fresh RS256 token for `payload`, valid for `ttl` from now.
///
/// Issued-at and expiry are stamped from a single clock read, so the span
/// between the two claims is exactly `ttl` in whole seconds. Every call mints
/// a new v4 UUID as the token ID.
pub fn issue(
    payload: &TokenPayload,
    ttl: Duration,
    signing_key: &EncodingKey,
) -> Result<IssuedToken, TokenError> {
    let now = Utc::now();
    let expires_at = now + ttl;

    let claims = TokenClaims {
        sub: payload.user_id,
        name: payload.username.clone(),
        roles: payload.roles.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(&Header::new(Algorithm::RS256), &claims, signing_key)
        .map_err(TokenError::Encoding)?;

    Ok(IssuedToken {
        token,
        token_id: claims.jti,
        user_id: payload.user_id,
        expires_at,
    })
}

/// Verify `token` against `verifying_key` and return its claims.
///
/// Signature and structural failures take precedence over expiry. The expiry
/// check allows no leeway: a token whose `exp` equals the current second is
/// already rejected.
pub fn validate(token: &str, verifying_key: &DecodingKey) -> Result<TokenClaims, TokenError> {
    // Expiry is checked by hand below; jsonwebtoken's built-in check keeps a
    // 60-second default leeway.
    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_exp = false;

    let data =
        decode::<TokenClaims>(token, verifying_key, &validation).map_err(|e| match e.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_)
            | ErrorKind::MissingRequiredClaim(_) => TokenError::Malformed,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::InvalidSignature,
        })?;

    if data.claims.exp <= Utc::now().timestamp() {
        return Err(TokenError::Expired);
    }

    Ok(data.claims)
}
