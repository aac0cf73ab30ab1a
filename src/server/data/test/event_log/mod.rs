use crate::server::{
    data::event_log::EventLogRepository,
    event::{AuditEvent, EventType},
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use serde_json::json;
use test_utils::builder::TestBuilder;

mod create;
