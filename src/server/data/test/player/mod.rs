use crate::server::{data::player::PlayerRepository, model::player::InsertPlayerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod insert;
