use crate::server::{data::user::UserRepository, model::user::InsertUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod insert;
