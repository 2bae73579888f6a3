use crate::server::{
    data::class::ClassRepository,
    error::AppError,
    model::class::{CreateClassParam, UpdateClassParam},
};
use entity::prelude::Class;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
