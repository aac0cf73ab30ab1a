use super::*;

/// Tests listing a user's codes.
///
/// Verifies that only the user's own codes are returned, newest first.
///
/// Expected: Ok with the user's two codes in descending creation order
#[tokio::test]
async fn returns_only_users_codes_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let older = ConfirmationCodeFactory::new(db, &user.id)
        .code("11111")
        .build()
        .await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let newer = ConfirmationCodeFactory::new(db, &user.id)
        .code("22222")
        .build()
        .await?;
    factory::create_code(db, &other.id).await?;

    let repo = ConfirmationCodeRepository::new(db);
    let codes = repo.find_by_user_id(&user.id).await?;

    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0].id, newer.id);
    assert_eq!(codes[1].id, older.id);

    Ok(())
}

/// Tests listing codes for a user that has none.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ConfirmationCodeRepository::new(db);

    assert!(repo.find_by_user_id(&user.id).await?.is_empty());

    Ok(())
}
