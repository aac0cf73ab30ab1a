use super::*;

/// Tests marking a user's email as verified.
///
/// Expected: Ok(true) and the flag persisted
#[tokio::test]
async fn sets_flag_on_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_email_verified(&user.id, "verifier").await?);

    let db_user = entity::prelude::User::find_by_id(user.id.as_str())
        .one(db)
        .await?
        .unwrap();
    assert!(db_user.email_verified);
    assert_eq!(db_user.last_modified_by, "verifier");

    Ok(())
}

/// Tests marking an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.set_email_verified("missing", "verifier").await?);

    Ok(())
}
