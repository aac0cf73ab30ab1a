use super::*;

/// Tests appending an audit event.
///
/// Verifies that the event type is stored by name and the payload as JSON text.
///
/// Expected: Ok with one row matching the event
#[tokio::test]
async fn stores_event_with_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventLogRepository::new(db);
    let stored = repo
        .create(AuditEvent {
            actor: "user-1".to_string(),
            description: "User created".to_string(),
            payload: Some(json!({ "id": "abc" })),
            event_type: EventType::UserCreated,
            source: "notification-api".to_string(),
            created_date: Utc::now(),
        })
        .await?;

    assert_eq!(stored.event_type, "USER_CREATED");
    assert_eq!(stored.actor, "user-1");
    assert_eq!(stored.source, "notification-api");
    let details: serde_json::Value =
        serde_json::from_str(stored.details.as_deref().unwrap()).unwrap();
    assert_eq!(details, json!({ "id": "abc" }));

    let rows = entity::prelude::EventLog::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests appending an event without a payload.
///
/// Expected: Ok with details unset
#[tokio::test]
async fn stores_event_without_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventLogRepository::new(db);
    let stored = repo
        .create(AuditEvent {
            actor: "anonymous".to_string(),
            description: "Subscription deleted".to_string(),
            payload: None,
            event_type: EventType::SubscriptionDeleted,
            source: "notification-api".to_string(),
            created_date: Utc::now(),
        })
        .await?;

    assert!(stored.details.is_none());
    assert_eq!(stored.event_type, "SUBSCRIPTION_DELETED");

    Ok(())
}
