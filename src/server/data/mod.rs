//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Multi-row writes on the user aggregate run inside a single transaction.

pub mod alert_type;
pub mod confirmation_code;
pub mod event_log;
pub mod language;
pub mod subscription;
pub mod user;

#[cfg(test)]
mod test;
