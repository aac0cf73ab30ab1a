//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into every handler through Axum's
//! state extraction. All fields are cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `CodeSettings` is `Copy`
//! - `EventPublisher` wraps a channel sender

use sea_orm::DatabaseConnection;

use crate::server::{config::CodeSettings, event::EventPublisher};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Length and lifetime of newly issued confirmation codes.
    pub code_settings: CodeSettings,

    /// Audit event sink. Recording never blocks the request.
    pub events: EventPublisher,
}

impl AppState {
    /// Creates a new AppState instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `code_settings` - Confirmation code settings from configuration
    /// - `events` - Publisher feeding the audit writer
    ///
    /// # Returns
    /// - `AppState` - New application state instance
    pub fn new(db: DatabaseConnection, code_settings: CodeSettings, events: EventPublisher) -> Self {
        Self {
            db,
            code_settings,
            events,
        }
    }
}
