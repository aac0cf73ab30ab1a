use crate::server::{
    data::confirmation_code::ConfirmationCodeRepository,
    model::confirmation_code::CreateCodeParams,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::confirmation_code::ConfirmationCodeFactory};

mod create;
mod delete_expired;
mod find_by_id_and_user;
mod find_by_user_id;
