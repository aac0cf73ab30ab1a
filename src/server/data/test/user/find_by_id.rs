use super::*;

/// Tests finding an existing user.
///
/// Verifies that the user is returned with its attributes.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParams {
            email: Some("found@example.com".to_string()),
            attributes: vec![UserAttribute {
                name: "source".to_string(),
                value: "web".to_string(),
            }],
            actor: "creator".to_string(),
        })
        .await?;

    let found = repo.find_by_id(&created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id("missing").await?.is_none());
    assert!(!repo.exists("missing").await?);

    Ok(())
}

/// Tests the existence check for a factory-created user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn exists_for_created_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists(&user.id).await?);

    Ok(())
}
