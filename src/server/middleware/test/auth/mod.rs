use axum::http::{header::AUTHORIZATION, HeaderMap};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::token,
    state::AppState,
};

mod require;

const TEST_SECRET: &str = "test-secret";

fn test_state(db: &sea_orm::DatabaseConnection) -> AppState {
    AppState::new(db.clone(), TEST_SECRET.to_string())
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    headers
}
