//! Shared helper utilities for factory methods.
//!
//! Provides the unique id counter used by all factories plus convenience
//! methods for creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifying fields to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a player together with its full dependency chain.
///
/// Creates, in order: a user, a team owned by that user, a position, and a
/// player on that team. All entities use default values; use the individual
/// factories when a test needs custom fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, team, position, player))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::position::Model,
        entity::player::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::create_team(db, user.id).await?;
    let position = crate::factory::position::create_position(db).await?;
    let player = crate::factory::player::create_player(db, team.id, position.id).await?;

    Ok((user, team, position, player))
}

/// Creates a training session together with its owning user and team.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, team, session))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_session_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::training_session::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::create_team(db, user.id).await?;
    let session = crate::factory::training_session::create_training_session(db, team.id).await?;

    Ok((user, team, session))
}

/// Creates `count` players on the given team, sharing one position.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team the players belong to
/// - `count` - Number of players to create
///
/// # Returns
/// - `Ok(players)` - Created players in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_players_for_team(
    db: &DatabaseConnection,
    team_id: i32,
    count: usize,
) -> Result<Vec<entity::player::Model>, DbErr> {
    let position = crate::factory::position::create_position(db).await?;

    let mut players = Vec::with_capacity(count);
    for _ in 0..count {
        players.push(crate::factory::player::create_player(db, team_id, position.id).await?);
    }

    Ok(players)
}
