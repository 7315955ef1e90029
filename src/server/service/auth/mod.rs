//! Account registration and login.
//!
//! Passwords are hashed with argon2 before they reach the data layer. Login
//! verifies the stored hash and issues a signed bearer token carrying the
//! user id; identity on later requests is always re-fetched from the
//! database by `AuthGuard`, never read back out of the token claim.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::TokenDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{InsertUserParams, User},
    },
};

/// Parameters for registering a new account. Carries the raw password;
/// hashing happens inside the service.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub password: String,
    pub phone: String,
    pub email: String,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    token_secret: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, token_secret: &'a str) -> Self {
        Self { db, token_secret }
    }

    /// Registers a new account.
    ///
    /// Rejects names, phones and emails that are already registered, then
    /// hashes the password and inserts the account.
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.name_exists(&params.name).await? {
            return Err(AppError::BadRequest("Name is already registered".to_string()));
        }
        if repo.phone_exists(&params.phone).await? {
            return Err(AppError::BadRequest("Phone is already registered".to_string()));
        }
        if repo.email_exists(&params.email).await? {
            return Err(AppError::BadRequest("Email is already registered".to_string()));
        }

        let password_hash = password::hash(&params.password)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        let user = repo
            .insert(InsertUserParams {
                name: params.name,
                password_hash,
                phone: params.phone,
                email: params.email,
            })
            .await?;

        Ok(user)
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// An unknown name and a wrong password are indistinguishable to the
    /// caller; both yield `AuthError::InvalidCredentials`.
    pub async fn login(&self, name: &str, raw_password: &str) -> Result<TokenDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_name(name).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(raw_password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let (token, expires_in) = token::issue(credentials.user.id, self.token_secret)
            .map_err(|e| AppError::InternalError(format!("Failed to issue token: {}", e)))?;

        Ok(TokenDto {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    const SECRET: &str = "test-secret";

    fn params(name: &str) -> RegisterParams {
        RegisterParams {
            name: name.to_string(),
            password: "hunter2".to_string(),
            phone: format!("6{}", name.len()),
            email: format!("{}@example.com", name),
        }
    }

    #[tokio::test]
    async fn register_stores_hash_not_password() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db, SECRET);
        let user = service.register(params("coach")).await.unwrap();

        let stored = UserRepository::new(db)
            .find_credentials_by_name("coach")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.user.id, user.id);
        assert_ne!(stored.password_hash, "hunter2");
        assert!(password::verify("hunter2", &stored.password_hash));
    }

    #[tokio::test]
    async fn register_rejects_taken_name() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db, SECRET);
        service.register(params("coach")).await.unwrap();

        let mut again = params("coach");
        again.phone = "600999888".to_string();
        again.email = "second@example.com".to_string();

        assert!(matches!(
            service.register(again).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn login_issues_token_for_valid_credentials() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db, SECRET);
        let user = service.register(params("coach")).await.unwrap();

        let dto = service.login("coach", "hunter2").await.unwrap();

        assert_eq!(dto.token_type, "Bearer");
        assert_eq!(dto.expires_in, token::TOKEN_TTL_MINUTES * 60);

        let claims = token::decode_claims(&dto.token, SECRET).unwrap();
        assert_eq!(claims.sub, user.id);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_name() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db, SECRET);
        service.register(params("coach")).await.unwrap();

        assert!(matches!(
            service.login("coach", "wrong").await,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
        assert!(matches!(
            service.login("nobody", "hunter2").await,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }
}
