mod alert_type;
mod confirmation_code;
mod event_log;
mod language;
mod subscription;
mod user;
