use super::*;

/// Tests listing a user's subscriptions.
///
/// Verifies that subscriptions of other users are excluded and codes are resolved.
///
/// Expected: Ok with the user's two subscriptions
#[tokio::test]
async fn returns_only_users_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first_alert, language, _) = create_subscription_with_dependencies(db).await?;
    let second_alert = factory::create_alert_type(db).await?;
    factory::create_subscription(db, &user.id, &second_alert.id, &language.id).await?;
    create_subscription_with_dependencies(db).await?;

    let repo = SubscriptionRepository::new(db);
    let subscriptions = repo.find_by_user_id(&user.id).await?;

    assert_eq!(subscriptions.len(), 2);
    assert!(subscriptions.iter().all(|s| s.user_id == user.id));
    assert!(subscriptions.iter().all(|s| s.language_code == language.code));
    let mut codes: Vec<_> = subscriptions
        .iter()
        .map(|s| s.alert_type_code.as_str())
        .collect();
    codes.sort();
    let mut expected = vec![first_alert.code.as_str(), second_alert.code.as_str()];
    expected.sort();
    assert_eq!(codes, expected);

    Ok(())
}

/// Tests listing subscriptions for a user with none.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);

    assert!(repo.find_by_user_id(&user.id).await?.is_empty());

    Ok(())
}
