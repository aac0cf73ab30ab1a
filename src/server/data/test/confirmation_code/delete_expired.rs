use super::*;

/// Tests sweeping expired codes.
///
/// Verifies that codes expired before the cut-off are deleted across all users and
/// unexpired codes remain.
///
/// Expected: Ok(2) with one code left
#[tokio::test]
async fn deletes_only_expired_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    ConfirmationCodeFactory::new(db, &first.id)
        .expires_in(Duration::hours(-2))
        .build()
        .await?;
    ConfirmationCodeFactory::new(db, &second.id)
        .expires_in(Duration::seconds(-1))
        .build()
        .await?;
    let live = ConfirmationCodeFactory::new(db, &first.id)
        .expires_in(Duration::hours(1))
        .build()
        .await?;

    let repo = ConfirmationCodeRepository::new(db);
    let removed = repo.delete_expired(Utc::now()).await?;

    assert_eq!(removed, 2);
    let remaining = entity::prelude::ConfirmationCode::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, live.id);

    Ok(())
}

/// Tests sweeping when nothing has expired.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_code(db, &user.id).await?;

    let repo = ConfirmationCodeRepository::new(db);

    assert_eq!(repo.delete_expired(Utc::now()).await?, 0);
    assert_eq!(entity::prelude::ConfirmationCode::find().count(db).await?, 1);

    Ok(())
}
