use chrono::{DateTime, Utc};

/// One signed token together with the bookkeeping the session layer needs.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_id: String,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}

/// Login's result: an access token and a refresh token, each with its own
/// key pair and lifetime.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}
