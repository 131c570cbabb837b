use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionCacheError {
    #[error("session cache failure: {0}")]
    Backend(String),
}
