//! User entity.

use super::role::Role;

/// A registered user together with its resolved roles.
///
/// `password` always holds a PHC-formatted hash, never the submitted secret.
#[derive(Debug, Clone, PartialEq)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl UserEntity {
    /// Creates a new UserEntity instance.
    pub fn new(id: i64, username: String, email: String, password: String, roles: Vec<Role>) -> Self {
        Self {
            id,
            username,
            email,
            password,
            roles,
        }
    }

    /// Returns true if the user holds a role with the given name.
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    /// Role names in the order they were loaded.
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Input data for inserting a user and its role associations in one go.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}
