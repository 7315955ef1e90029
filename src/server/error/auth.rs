use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was supplied on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// The supplied token failed signature or claim validation.
    #[error("Invalid bearer token")]
    InvalidToken,

    /// The supplied token is past its expiry timestamp.
    #[error("Expired bearer token")]
    ExpiredToken,

    /// The token subject no longer exists in the database.
    ///
    /// Tokens carry only the user id; the account may have been removed
    /// after the token was issued.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user does not own the team that owns the resource.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown name or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized: a missing, invalid or expired
/// token, a vanished token subject, a failed login, and an ownership
/// violation are all surfaced the same way to the caller. The specific
/// reason is logged at debug level; client-facing messages stay generic to
/// avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::AccessDenied(_, _) => "Access denied",
            _ => "Authentication required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
