use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        player::{
            delete_player, get_player, get_player_stats, get_positions, get_team_players,
            insert_player, my_players,
        },
        team::{create_team, delete_team, get_team, my_teams},
        training::{
            create_session, delete_session, finalize_session, get_session, get_session_players,
            get_session_ratings, get_team_sessions, start_session,
        },
        user::{email_registered, login, name_registered, phone_registered, register},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(register))
        .route("/api/users/login/{name}/{password}", post(login))
        .route("/api/users/name-registered/{name}", get(name_registered))
        .route("/api/users/phone-registered/{phone}", get(phone_registered))
        .route("/api/users/email-registered/{email}", get(email_registered))
        .route("/api/teams", post(create_team).get(my_teams))
        .route("/api/teams/{team_id}", get(get_team).delete(delete_team))
        .route("/api/teams/{team_id}/players", get(get_team_players))
        .route("/api/teams/{team_id}/trainings", get(get_team_sessions))
        .route("/api/teams/{team_id}/trainings/{name}", post(create_session))
        .route("/api/players", post(insert_player).get(my_players))
        .route("/api/players/positions", get(get_positions))
        .route(
            "/api/players/{player_id}",
            get(get_player).delete(delete_player),
        )
        .route("/api/players/{player_id}/stats", get(get_player_stats))
        .route(
            "/api/trainings/{session_id}",
            get(get_session).delete(delete_session),
        )
        .route(
            "/api/trainings/{session_id}/players",
            post(start_session).get(get_session_players),
        )
        .route(
            "/api/trainings/{session_id}/ratings",
            post(finalize_session).get(get_session_ratings),
        )
}
