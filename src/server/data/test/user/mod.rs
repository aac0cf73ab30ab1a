use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams, UserAttribute},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod set_email_verified;
mod update;
