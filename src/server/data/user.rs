//! User data repository for database operations.
//!
//! Handles account creation, credential lookup for login, and the uniqueness
//! probes used by the registration form. The password hash crosses this
//! boundary only inside `Credentials`; every other method strips it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{Credentials, InsertUserParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The password must already be hashed by the auth service; this method
    /// persists whatever hash it is given.
    ///
    /// # Arguments
    /// - `params` - Account fields including the argon2 password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user (hash stripped)
    /// - `Err(DbErr)` - Database error, including unique constraint
    ///   violations on name, phone or email
    pub async fn insert(&self, params: InsertUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            password_hash: ActiveValue::Set(params.password_hash),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by login name together with their stored password hash.
    ///
    /// Used exclusively by the login flow; everything else goes through
    /// `find_by_id`, which never exposes the hash.
    ///
    /// # Returns
    /// - `Ok(Some(Credentials))` - User and hash for verification
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Credentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| Credentials {
            password_hash: e.password_hash.clone(),
            user: User::from_entity(e),
        }))
    }

    /// Checks whether a login name is already registered.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a phone number is already registered.
    pub async fn phone_exists(&self, phone: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Phone.eq(phone))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email address is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
