use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CredentialStoreError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    AlreadyExists,
    #[error("credential store failure: {0}")]
    Backend(String),
}
