/// A stored user record as the credential store returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: i32,
    pub name: String,
    pub salt: String,
    pub password_hash: String,
    pub roles: Vec<String>, // role names, in assignment order
}

/// Store input for a user that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIdentity {
    pub name: String,
    pub salt: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl NewIdentity {
    pub fn new(name: String, salt: String, password_hash: String, roles: Vec<String>) -> Self {
        NewIdentity {
            name,
            salt,
            password_hash,
            roles,
        }
    }

    pub fn with_id(self, id: i32) -> Identity {
        Identity {
            id,
            name: self.name,
            salt: self.salt,
            password_hash: self.password_hash,
            roles: self.roles,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
}
