use std::collections::HashMap;

use crate::domain::{CredentialStore, CredentialStoreError, Identity, NewIdentity, Role};

/// In-memory credential store, keyed by username. Ships with the "user" and
/// "admin" roles seeded so sign-up finds its default role.
pub struct HashmapCredentialStore {
    users: HashMap<String, Identity>,
    roles: HashMap<String, Role>,
    next_user_id: i32,
}

impl HashmapCredentialStore {
    pub fn new() -> Self {
        let mut roles = HashMap::new();
        roles.insert(
            "user".to_owned(),
            Role {
                id: 1,
                name: "user".to_owned(),
            },
        );
        roles.insert(
            "admin".to_owned(),
            Role {
                id: 2,
                name: "admin".to_owned(),
            },
        );

        HashmapCredentialStore {
            users: HashMap::new(),
            roles,
            next_user_id: 1,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for HashmapCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CredentialStore for HashmapCredentialStore {
    async fn find_by_name(&self, name: &str) -> Result<Identity, CredentialStoreError> {
        self.users
            .get(name)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }

    async fn create(&mut self, identity: NewIdentity) -> Result<Identity, CredentialStoreError> {
        if self.users.contains_key(&identity.name) {
            return Err(CredentialStoreError::AlreadyExists);
        }

        let id = self.next_user_id;
        self.next_user_id += 1;

        let identity = identity.with_id(id);
        self.users.insert(identity.name.clone(), identity.clone());
        Ok(identity)
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Role, CredentialStoreError> {
        self.roles
            .get(name)
            .cloned()
            .ok_or(CredentialStoreError::NotFound)
    }
}
