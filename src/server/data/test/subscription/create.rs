use super::*;

/// Tests creating a subscription.
///
/// Verifies that the returned subscription exposes the alert type and language by code.
///
/// Expected: Ok with codes resolved
#[tokio::test]
async fn creates_subscription_with_resolved_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let alert_type = factory::create_alert_type(db).await?;
    let language = factory::create_language(db).await?;

    let repo = SubscriptionRepository::new(db);
    let subscription = repo
        .create(CreateSubscriptionParams {
            user_id: user.id.clone(),
            alert_type_id: alert_type.id.clone(),
            language_id: language.id.clone(),
            actor: "subscriber".to_string(),
        })
        .await?;

    assert_eq!(subscription.user_id, user.id);
    assert_eq!(subscription.alert_type_code, alert_type.code);
    assert_eq!(subscription.language_code, language.code);
    assert_eq!(subscription.created_by, "subscriber");

    Ok(())
}

/// Tests the unique index on (user, alert type).
///
/// Verifies that a second insert for the same pair fails with a unique constraint
/// violation and leaves a single row.
///
/// Expected: Err(UniqueConstraintViolation) with one row stored
#[tokio::test]
async fn rejects_second_subscription_for_same_alert_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, alert_type, language, _) = create_subscription_with_dependencies(db).await?;

    let repo = SubscriptionRepository::new(db);
    let result = repo
        .create(CreateSubscriptionParams {
            user_id: user.id,
            alert_type_id: alert_type.id,
            language_id: language.id,
            actor: "subscriber".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Subscription::find().count(db).await?, 1);

    Ok(())
}
