use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParam, UpdateStudentParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
