use crate::server::data::alert_type::AlertTypeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::alert_type::AlertTypeFactory};

mod find;
