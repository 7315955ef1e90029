use serde::{Deserialize, Serialize};

/// Public view of a user account. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Registration payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterUserDto {
    pub name: String,
    pub password: String,
    pub phone: String,
    pub email: String,
}

/// Bearer token issued on successful login.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenDto {
    pub token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}
