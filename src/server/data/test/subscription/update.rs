use super::*;

/// Tests changing a subscription's language.
///
/// Verifies that the new language code is returned and the modifier is recorded.
///
/// Expected: Ok(Some) with new language
#[tokio::test]
async fn changes_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, alert_type, _, subscription) = create_subscription_with_dependencies(db).await?;
    let french = factory::language::LanguageFactory::new(db)
        .code("FR")
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);
    let updated = repo
        .update(UpdateSubscriptionParams {
            id: subscription.id.clone(),
            language_id: french.id.clone(),
            actor: "editor".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, subscription.id);
    assert_eq!(updated.language_code, "FR");
    assert_eq!(updated.alert_type_code, alert_type.code);
    assert_eq!(updated.last_modified_by, "editor");
    assert_eq!(updated.created_by, subscription.created_by);

    Ok(())
}

/// Tests updating a subscription that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let language = factory::create_language(db).await?;

    let repo = SubscriptionRepository::new(db);
    let result = repo
        .update(UpdateSubscriptionParams {
            id: "missing".to_string(),
            language_id: language.id,
            actor: "editor".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
