use super::*;

/// Tests deleting a subscription through its owner.
///
/// Expected: Ok(true) with no rows left
#[tokio::test]
async fn deletes_owned_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, subscription) = create_subscription_with_dependencies(db).await?;

    let repo = SubscriptionRepository::new(db);

    assert!(repo.delete(&subscription.id, &user.id).await?);
    assert_eq!(entity::prelude::Subscription::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a user cannot delete another user's subscription.
///
/// Expected: Ok(false) with the subscription kept
#[tokio::test]
async fn ignores_subscription_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, subscription) = create_subscription_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);

    assert!(!repo.delete(&subscription.id, &other.id).await?);
    assert_eq!(entity::prelude::Subscription::find().count(db).await?, 1);

    Ok(())
}
