//! Bearer token authentication and ownership guard.
//!
//! `AuthGuard` is the single authorization predicate for the whole API:
//! every protected handler authenticates through `require`, and every
//! ownership decision funnels through `ensure_owner`, whether reached via a
//! `Permission` or applied by a service mid-validation. Handlers never
//! re-derive the owner comparison inline.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{team::Team, user::User},
    service::auth::token,
    state::AppState,
};

pub enum Permission {
    /// Requester must own the team with the given id.
    ///
    /// The team is loaded as part of the check; a missing team maps to 404
    /// before ownership is considered.
    TeamOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token_secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self {
            db: &state.db,
            token_secret: &state.token_secret,
            headers,
        }
    }

    /// Authenticates the request and checks the given permissions.
    ///
    /// Decodes and validates the bearer token, re-fetches the user by the
    /// token's subject id (the token carries no other identity, so profile
    /// data can never be stale), then applies each permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with all permissions satisfied
    /// - `Err(AppError::AuthErr)` - Missing/invalid/expired token, vanished
    ///   account, or failed ownership check
    /// - `Err(AppError::NotFound)` - A permission referenced a missing team
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token()?;
        let claims = token::decode_claims(token, self.token_secret)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::TeamOwner(team_id) => {
                    self.authorize_team_owner(&user, *team_id).await?;
                }
            }
        }

        Ok(user)
    }

    /// Loads a team and applies the ownership predicate.
    ///
    /// # Returns
    /// - `Ok(())` - Team exists and is owned by `user`
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Owned by another user
    pub async fn authorize_team_owner(&self, user: &User, team_id: i32) -> Result<(), AppError> {
        let Some(team) = TeamRepository::new(self.db).find_by_id(team_id).await? else {
            return Err(AppError::NotFound("Team not found".to_string()));
        };

        Self::ensure_owner(user, &team)
    }

    /// The ownership predicate: requester id must equal the team's owner id.
    ///
    /// Existence has already been established by the caller; this only
    /// decides owned vs. not owned.
    pub fn ensure_owner(user: &User, team: &Team) -> Result<(), AppError> {
        if team.user_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User does not own team {}", team.id),
            )
            .into());
        }

        Ok(())
    }

    fn bearer_token(&self) -> Result<&str, AuthError> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)
    }
}
