//! Domain models and operation-specific parameter types.
//!
//! Domain models sit between the data layer (SeaORM entities) and the
//! controller layer (wire DTOs). Conversions happen at the layer boundaries:
//! `from_entity` at the repository boundary, `into_dto` at the controller
//! boundary.

pub mod player;
pub mod team;
pub mod training;
pub mod user;
