//! Bearer token issue and validation.
//!
//! Tokens are HS256 JWTs signed with the shared secret from configuration.
//! The only identity carried in the claim is the user id; the guard
//! re-fetches the account on every request, so a token never serves stale
//! profile data.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Token lifetime in minutes.
pub const TOKEN_TTL_MINUTES: i64 = 180;

/// Claims embedded in issued bearer tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Id of the authenticated user.
    pub sub: i32,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: usize,
    /// Expiry, seconds since the Unix epoch.
    pub exp: usize,
}

/// Issues a signed token for the given user id.
///
/// # Returns
/// - `Ok((token, expires_in))` - Encoded token and its lifetime in seconds
/// - `Err(jsonwebtoken::errors::Error)` - Encoding failure
pub fn issue(user_id: i32, secret: &str) -> Result<(String, i64), jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_in = TOKEN_TTL_MINUTES * 60;

    let claims = TokenClaims {
        sub: user_id,
        iat: now.timestamp() as usize,
        exp: (now + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok((token, expires_in))
}

/// Validates a token and returns its claims.
///
/// # Returns
/// - `Ok(TokenClaims)` - Signature and expiry are valid
/// - `Err(AuthError::ExpiredToken)` - Token past its expiry
/// - `Err(AuthError::InvalidToken)` - Bad signature, shape, or claims
pub fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims, AuthError> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    match decode::<TokenClaims>(token, &decoding_key, &validation) {
        Ok(token_data) => Ok(token_data.claims),
        Err(err) => match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(AuthError::ExpiredToken),
            _ => Err(AuthError::InvalidToken),
        },
    }
}
