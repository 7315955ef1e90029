use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::RegisterUserDto,
    server::{
        data::user::UserRepository,
        error::AppError,
        service::auth::{AuthService, RegisterParams},
        state::AppState,
    },
};

/// POST /api/users
/// Registers a new coach account.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.token_secret);

    let user = auth_service
        .register(RegisterParams {
            name: dto.name,
            password: dto.password,
            phone: dto.phone,
            email: dto.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/users/login/{name}/{password}
/// Exchanges credentials for a bearer token with a 180-minute expiry.
pub async fn login(
    State(state): State<AppState>,
    Path((name, password)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.token_secret);

    let token = auth_service.login(&name, &password).await?;

    Ok((StatusCode::OK, Json(token)))
}

/// GET /api/users/name-registered/{name}
/// Availability probe used by the registration form.
pub async fn name_registered(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let exists = UserRepository::new(&state.db).name_exists(&name).await?;

    Ok((StatusCode::OK, Json(exists)))
}

/// GET /api/users/phone-registered/{phone}
pub async fn phone_registered(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let exists = UserRepository::new(&state.db).phone_exists(&phone).await?;

    Ok((StatusCode::OK, Json(exists)))
}

/// GET /api/users/email-registered/{email}
pub async fn email_registered(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let exists = UserRepository::new(&state.db).email_exists(&email).await?;

    Ok((StatusCode::OK, Json(exists)))
}
