use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::team::{CreateTeamDto, TeamDto},
    server::{
        data::team::TeamRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::CreateTeamParams,
        state::AppState,
    },
};

/// POST /api/teams
/// Creates a team owned by the requester.
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let team = TeamRepository::new(&state.db)
        .insert(CreateTeamParams {
            user_id: user.id,
            name: dto.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// GET /api/teams
/// Lists the requester's teams.
pub async fn my_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let teams = TeamRepository::new(&state.db).find_by_user(user.id).await?;

    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let team = TeamRepository::new(&state.db)
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    AuthGuard::ensure_owner(&user, &team)?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// DELETE /api/teams/{team_id}
/// Deletes a team; players and sessions cascade with it.
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let repo = TeamRepository::new(&state.db);

    let team = repo
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    AuthGuard::ensure_owner(&user, &team)?;

    repo.delete(team_id).await?;

    Ok(StatusCode::OK)
}
