use super::*;

/// Tests updating a user's email and verification flag.
///
/// Verifies that both fields and the last modifier are written.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_email_and_verification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email_verified(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id.clone(),
            email: Some("new@example.com".to_string()),
            email_verified: false,
            actor: "editor".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.email.as_deref(), Some("new@example.com"));
    assert!(!updated.email_verified);
    assert_eq!(updated.last_modified_by, "editor");
    assert_eq!(updated.created_by, user.created_by);

    Ok(())
}

/// Tests updating a user that does not exist.
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
    let result = repo
        .update(UpdateUserParams {
            id: "missing".to_string(),
            email: None,
            email_verified: false,
            actor: "editor".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
