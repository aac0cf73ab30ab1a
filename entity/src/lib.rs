//! SeaORM entity definitions for the subscription service schema.

pub mod prelude;

pub mod alert_type;
pub mod confirmation_code;
pub mod event_log;
pub mod language;
pub mod subscription;
pub mod user;
pub mod user_attribute;
