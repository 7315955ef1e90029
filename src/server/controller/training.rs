use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        player::PlayerDto,
        training::{FinalizeSessionDto, SessionRatingDto, StartSessionDto, TrainingSessionDto},
    },
    server::{
        data::training::TrainingRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::training::TrainingService,
        state::AppState,
    },
};

/// POST /api/teams/{team_id}/trainings/{name}
/// Creates a session in the created state (inactive, no timestamps).
pub async fn create_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((team_id, name)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state, &headers)
        .require(&[Permission::TeamOwner(team_id)])
        .await?;

    let session = TrainingRepository::new(&state.db).insert(team_id, name).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// GET /api/teams/{team_id}/trainings
/// Lists the sessions of one of the requester's teams.
pub async fn get_team_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state, &headers)
        .require(&[Permission::TeamOwner(team_id)])
        .await?;

    let sessions = TrainingRepository::new(&state.db).find_by_team(team_id).await?;

    let dtos: Vec<TrainingSessionDto> = sessions.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/trainings/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state, &headers);
    let user = guard.require(&[]).await?;

    let session = TrainingRepository::new(&state.db)
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Training session not found".to_string()))?;

    guard.authorize_team_owner(&user, session.team_id).await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// DELETE /api/trainings/{session_id}
pub async fn delete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state, &headers);
    let user = guard.require(&[]).await?;

    let repo = TrainingRepository::new(&state.db);

    let session = repo
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Training session not found".to_string()))?;

    guard.authorize_team_owner(&user, session.team_id).await?;

    repo.delete(session_id).await?;

    Ok(StatusCode::OK)
}

/// POST /api/trainings/{session_id}/players
/// Enrolls a roster and starts the session.
///
/// A nonexistent session is a 400 here, unlike the other session handlers:
/// the start operation treats it as one more violated precondition.
pub async fn start_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
    Json(dto): Json<StartSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let session = TrainingRepository::new(&state.db)
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Training session not found".to_string()))?;

    TrainingService::new(&state.db)
        .start(&user, &session, &dto.player_ids)
        .await?;

    Ok(StatusCode::OK)
}

/// GET /api/trainings/{session_id}/players
/// Lists the players enrolled in a session.
pub async fn get_session_players(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state, &headers);
    let user = guard.require(&[]).await?;

    let repo = TrainingRepository::new(&state.db);

    let session = repo
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Training session not found".to_string()))?;

    guard.authorize_team_owner(&user, session.team_id).await?;

    let players = repo.players_for_session(session_id).await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/trainings/{session_id}/ratings
/// Records six scores per enrolled player and finalizes the session.
pub async fn finalize_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
    Json(dto): Json<FinalizeSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let session = TrainingRepository::new(&state.db)
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Training session not found".to_string()))?;

    TrainingService::new(&state.db)
        .finalize(&user, &session, &dto.player_ids, &dto.scores)
        .await?;

    Ok(StatusCode::OK)
}

/// GET /api/trainings/{session_id}/ratings
/// Reads the recorded ratings of a finalized session.
pub async fn get_session_ratings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let session = TrainingRepository::new(&state.db)
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Training session not found".to_string()))?;

    let ratings = TrainingService::new(&state.db).ratings(&user, &session).await?;

    let dtos: Vec<SessionRatingDto> = ratings.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
