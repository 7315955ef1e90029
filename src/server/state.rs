//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a pooled handle and `String` is only cloned
//! on construction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Shared secret used to sign and validate bearer tokens.
    pub token_secret: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, token_secret: String) -> Self {
        Self { db, token_secret }
    }
}
