use super::*;

/// Tests finding a code through its owner.
///
/// Expected: Ok(Some) with the code
#[tokio::test]
async fn finds_code_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let code = factory::create_code(db, &user.id).await?;

    let repo = ConfirmationCodeRepository::new(db);
    let found = repo.find_by_id_and_user(&code.id, &user.id).await?;

    assert_eq!(found.map(|c| c.id), Some(code.id));

    Ok(())
}

/// Tests that a code is not visible through another user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_code_from_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let code = factory::create_code(db, &owner.id).await?;

    let repo = ConfirmationCodeRepository::new(db);

    assert!(repo.find_by_id_and_user(&code.id, &other.id).await?.is_none());

    Ok(())
}
