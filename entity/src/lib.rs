//! SeaORM entity definitions for the trainadmin database schema.

pub mod prelude;

pub mod player;
pub mod player_rating;
pub mod position;
pub mod session_player;
pub mod team;
pub mod training_session;
pub mod user;
