use super::*;

/// Tests creating a user without attributes.
///
/// Verifies that the repository assigns an ID, stores the email unverified and
/// stamps the actor in both audit columns.
///
/// Expected: Ok with user created and email_verified false
#[tokio::test]
async fn creates_user_without_attributes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: Some("someone@example.com".to_string()),
            attributes: vec![],
            actor: "creator".to_string(),
        })
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.email.as_deref(), Some("someone@example.com"));
    assert!(!user.email_verified);
    assert!(user.attributes.is_empty());
    assert_eq!(user.created_by, "creator");
    assert_eq!(user.last_modified_by, "creator");

    let db_user = entity::prelude::User::find_by_id(user.id.as_str())
        .one(db)
        .await?;
    assert!(db_user.is_some());

    Ok(())
}

/// Tests creating a user with attributes.
///
/// Verifies that every attribute is persisted against the new user and returned
/// with it.
///
/// Expected: Ok with two attribute rows owned by the user
#[tokio::test]
async fn creates_user_with_attributes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: None,
            attributes: vec![
                UserAttribute {
                    name: "client_number".to_string(),
                    value: "123".to_string(),
                },
                UserAttribute {
                    name: "province".to_string(),
                    value: "ON".to_string(),
                },
            ],
            actor: "creator".to_string(),
        })
        .await?;

    assert_eq!(user.attributes.len(), 2);

    let count = entity::prelude::UserAttribute::find()
        .filter(entity::user_attribute::Column::UserId.eq(user.id.as_str()))
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that a failed attribute insert rolls back the user.
///
/// Verifies that when the attribute table is missing, the transaction leaves no
/// user row behind.
///
/// Expected: Err and no user persisted
#[tokio::test]
async fn rolls_back_user_when_attribute_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: None,
            attributes: vec![UserAttribute {
                name: "client_number".to_string(),
                value: "123".to_string(),
            }],
            actor: "creator".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
