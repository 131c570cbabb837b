use thiserror::Error;

use super::TokenError;

/// Errors surfaced by the session service.
///
/// `InvalidCredentials` deliberately covers both an unknown name and a wrong
/// password so callers cannot probe which names exist. `Backend` keeps a
/// fixed message; the underlying store error travels on the `source()` chain
/// only.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("user already exists")]
    AlreadyExists,

    #[error("invalid name or password")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken(#[source] TokenError),

    #[error("session has been revoked")]
    Revoked,

    #[error("backend unavailable")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    pub(crate) fn backend<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SessionError::Backend(Box::new(e))
    }
}
