use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::event::AuditEvent;

pub struct EventLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit event. The payload is stored as serialized JSON.
    pub async fn create(&self, event: AuditEvent) -> Result<entity::event_log::Model, DbErr> {
        entity::event_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            actor: ActiveValue::Set(event.actor),
            description: ActiveValue::Set(event.description),
            details: ActiveValue::Set(event.payload.map(|payload| payload.to_string())),
            event_type: ActiveValue::Set(event.event_type.to_string()),
            source: ActiveValue::Set(event.source),
            created_date: ActiveValue::Set(event.created_date),
        }
        .insert(self.db)
        .await
    }
}
