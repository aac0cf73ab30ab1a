use super::*;

/// Tests the duplicate check for an existing subscription.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_subscribed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, alert_type, _, _) = create_subscription_with_dependencies(db).await?;

    let repo = SubscriptionRepository::new(db);

    assert!(repo.exists_for_alert_type(&user.id, &alert_type.id).await?);

    Ok(())
}

/// Tests the duplicate check is scoped to the user.
///
/// Verifies that another user's subscription to the same alert type does not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, alert_type, _, _) = create_subscription_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);

    assert!(!repo.exists_for_alert_type(&other.id, &alert_type.id).await?);

    Ok(())
}
