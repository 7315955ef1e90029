pub use super::player::Entity as Player;
pub use super::player_rating::Entity as PlayerRating;
pub use super::position::Entity as Position;
pub use super::session_player::Entity as SessionPlayer;
pub use super::team::Entity as Team;
pub use super::training_session::Entity as TrainingSession;
pub use super::user::Entity as User;
