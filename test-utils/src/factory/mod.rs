//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key dependencies through the helpers
//! module, keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let team = factory::team::create_team(&db, user.id).await?;
//!
//!     // Create a full hierarchy in one call
//!     let (user, team, position, player) =
//!         factory::helpers::create_player_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db, team.id, position.id)
//!     .name("Custom Player")
//!     .shirt_number(10)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod player;
pub mod position;
pub mod team;
pub mod training_session;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use player::create_player;
pub use position::create_position;
pub use team::create_team;
pub use training_session::create_training_session;
pub use user::create_user;
