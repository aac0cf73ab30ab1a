//! Audit event sink.
//!
//! Controllers record an event after an operation succeeds. `EventPublisher::record` only
//! enqueues onto an unbounded channel and returns, so a request never waits on the audit
//! write. A single background writer drains the channel into the `event_log` table; failed
//! writes are logged and dropped.

pub mod writer;

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    UserCreated,
    UserUpdated,
    UserDeleted,
    ConfirmationCodeCreated,
    EmailVerified,
    SubscriptionCreated,
    SubscriptionUpdated,
    SubscriptionDeleted,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UserCreated => "USER_CREATED",
            Self::UserUpdated => "USER_UPDATED",
            Self::UserDeleted => "USER_DELETED",
            Self::ConfirmationCodeCreated => "CONFIRMATION_CODE_CREATED",
            Self::EmailVerified => "EMAIL_VERIFIED",
            Self::SubscriptionCreated => "SUBSCRIPTION_CREATED",
            Self::SubscriptionUpdated => "SUBSCRIPTION_UPDATED",
            Self::SubscriptionDeleted => "SUBSCRIPTION_DELETED",
        };

        f.write_str(name)
    }
}

/// One audit record as queued for the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    pub actor: String,
    pub description: String,
    pub payload: Option<Value>,
    pub event_type: EventType,
    pub source: String,
    pub created_date: DateTime<Utc>,
}

/// Sending half of the audit channel. Cheap to clone.
#[derive(Clone)]
pub struct EventPublisher {
    sender: UnboundedSender<AuditEvent>,
    source: String,
}

impl EventPublisher {
    /// Creates a publisher stamping `source` on every event, and the receiver to hand to
    /// `writer::spawn_writer`.
    pub fn channel(source: impl Into<String>) -> (Self, UnboundedReceiver<AuditEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (
            Self {
                sender,
                source: source.into(),
            },
            receiver,
        )
    }

    /// Queues an event without waiting for it to be written.
    pub fn record(
        &self,
        actor: &str,
        description: impl Into<String>,
        payload: Option<Value>,
        event_type: EventType,
    ) {
        let event = AuditEvent {
            actor: actor.to_string(),
            description: description.into(),
            payload,
            event_type,
            source: self.source.clone(),
            created_date: Utc::now(),
        };

        if self.sender.send(event).is_err() {
            tracing::warn!("Audit writer has stopped; dropping {} event", event_type);
        }
    }
}
