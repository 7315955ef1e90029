//! User domain models and parameters.

use crate::model::user::UserDto;

/// Registered coach account.
///
/// The password hash never leaves the data layer; this model carries only
/// the identity and profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository
    /// boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
        }
    }
}

/// A user together with their stored password hash, for login verification.
///
/// Only the login flow sees this; every other path works with `User`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for inserting a user at registration.
///
/// `password_hash` must already be an argon2 PHC string; hashing happens in
/// the auth service, not the repository.
#[derive(Debug, Clone)]
pub struct InsertUserParams {
    pub name: String,
    pub password_hash: String,
    pub phone: String,
    pub email: String,
}
