use crate::server::{
    data::subscription::SubscriptionRepository,
    model::subscription::{CreateSubscriptionParams, UpdateSubscriptionParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_subscription_with_dependencies};

mod create;
mod delete;
mod exists_for_alert_type;
mod find_by_user_id;
mod update;
