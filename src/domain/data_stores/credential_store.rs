use crate::domain::{Identity, NewIdentity, Role};

use super::CredentialStoreError;

#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Identity, CredentialStoreError>;
    async fn create(&mut self, identity: NewIdentity) -> Result<Identity, CredentialStoreError>;
    async fn find_role_by_name(&self, name: &str) -> Result<Role, CredentialStoreError>;
}
