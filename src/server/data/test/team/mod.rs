use crate::server::{data::team::TeamRepository, model::team::CreateTeamParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
