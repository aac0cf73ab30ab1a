use super::*;

/// Tests deleting a user with owned rows.
///
/// Verifies that the user's codes, subscriptions and attributes are removed with it,
/// and that another user's rows are untouched.
///
/// Expected: Ok(true) with only the other user's rows left
#[tokio::test]
async fn deletes_user_and_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: Some("gone@example.com".to_string()),
            attributes: vec![UserAttribute {
                name: "source".to_string(),
                value: "web".to_string(),
            }],
            actor: "creator".to_string(),
        })
        .await?;
    let alert_type = factory::create_alert_type(db).await?;
    let language = factory::create_language(db).await?;
    factory::create_code(db, &user.id).await?;
    factory::create_subscription(db, &user.id, &alert_type.id, &language.id).await?;

    let other = factory::create_user(db).await?;
    factory::create_code(db, &other.id).await?;

    assert!(repo.delete(&user.id).await?);

    assert!(repo.find_by_id(&user.id).await?.is_none());
    assert_eq!(
        entity::prelude::ConfirmationCode::find()
            .filter(entity::confirmation_code::Column::UserId.eq(user.id.as_str()))
            .count(db)
            .await?,
        0
    );
    assert_eq!(entity::prelude::Subscription::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserAttribute::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ConfirmationCode::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_subscription_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete("missing").await?);

    Ok(())
}
