use crate::server::{data::training::TrainingRepository, model::training::Scores};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod finalize;
mod insert;
mod start;
