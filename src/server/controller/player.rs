use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::player::{CreatePlayerDto, PlayerDto, PositionDto},
    server::{
        data::{player::PlayerRepository, position::PositionRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::player::InsertPlayerParams,
        service::player::PlayerService,
        state::AppState,
    },
};

/// POST /api/players
/// Inserts a player on one of the requester's teams.
///
/// A nonexistent team or position is a 400; a team owned by another user is
/// a 401.
pub async fn insert_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let player = PlayerService::new(&state.db)
        .insert(
            &user,
            InsertPlayerParams {
                team_id: dto.team_id,
                position_id: dto.position_id,
                name: dto.name,
                shirt_number: dto.shirt_number,
                age: dto.age,
                weight: dto.weight,
                height: dto.height,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// GET /api/players/positions
/// Lists the static position reference data. Unauthenticated, like the
/// registration probes.
pub async fn get_positions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let positions = PositionRepository::new(&state.db).find_all().await?;

    let dtos: Vec<PositionDto> = positions.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/players
/// Lists every player across the requester's teams.
pub async fn my_players(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require(&[]).await?;

    let players = PlayerRepository::new(&state.db).find_by_user(user.id).await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/players/{player_id}
pub async fn get_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state, &headers);
    let user = guard.require(&[]).await?;

    let player = PlayerRepository::new(&state.db)
        .find_by_id(player_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

    guard.authorize_team_owner(&user, player.team_id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// GET /api/players/{player_id}/stats
/// Per-score averages across the player's rated sessions.
pub async fn get_player_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state, &headers);
    let user = guard.require(&[]).await?;

    let player = PlayerRepository::new(&state.db)
        .find_by_id(player_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

    guard.authorize_team_owner(&user, player.team_id).await?;

    let stats = PlayerService::new(&state.db).stats(player.id).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// GET /api/teams/{team_id}/players
/// Lists the players of one of the requester's teams.
pub async fn get_team_players(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state, &headers)
        .require(&[Permission::TeamOwner(team_id)])
        .await?;

    let players = PlayerRepository::new(&state.db).find_by_team(team_id).await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// DELETE /api/players/{player_id}
pub async fn delete_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state, &headers);
    let user = guard.require(&[]).await?;

    let repo = PlayerRepository::new(&state.db);

    let player = repo
        .find_by_id(player_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

    guard.authorize_team_owner(&user, player.team_id).await?;

    repo.delete(player_id).await?;

    Ok(StatusCode::OK)
}
