use thiserror::Error;

/// Failure kinds of the stateless token codec.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to serialize or sign token claims")]
    Encoding(#[source] jsonwebtoken::errors::Error),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,
}
