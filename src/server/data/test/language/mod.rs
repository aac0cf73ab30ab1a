use crate::server::data::language::LanguageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::language::LanguageFactory};

mod find_by_code_or_alias;
mod get_all;
