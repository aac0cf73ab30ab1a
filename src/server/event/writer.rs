use sea_orm::DatabaseConnection;
use tokio::{sync::mpsc::UnboundedReceiver, task::JoinHandle};

use crate::server::{data::event_log::EventLogRepository, event::AuditEvent};

/// Spawns the task that persists queued audit events.
///
/// The task runs until every `EventPublisher` has been dropped and the queue is drained.
pub fn spawn_writer(
    db: DatabaseConnection,
    mut receiver: UnboundedReceiver<AuditEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            let event_type = event.event_type;

            if let Err(e) = EventLogRepository::new(&db).create(event).await {
                tracing::error!("Failed to write {} audit event: {}", event_type, e);
            }
        }

        tracing::info!("Audit writer stopped");
    })
}
