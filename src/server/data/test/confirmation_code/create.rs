use super::*;

/// Tests creating a confirmation code.
///
/// Verifies that the code, email, expiry and audit columns are persisted as given.
///
/// Expected: Ok with code created
#[tokio::test]
async fn creates_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = ConfirmationCodeRepository::new(db);
    let code = repo
        .create(CreateCodeParams {
            user_id: user.id.clone(),
            email: user.email.clone(),
            code: "00042".to_string(),
            created_date: now,
            expiry_date: now + Duration::hours(24),
            actor: "issuer".to_string(),
        })
        .await?;

    assert_eq!(code.user_id, user.id);
    assert_eq!(code.email, user.email);
    assert_eq!(code.code, "00042");
    assert_eq!(code.expiry_date - code.created_date, Duration::hours(24));
    assert_eq!(code.created_by, "issuer");

    assert_eq!(entity::prelude::ConfirmationCode::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a user may hold several codes with the same value.
///
/// Expected: Ok with both codes persisted
#[tokio::test]
async fn allows_duplicate_values_for_one_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = ConfirmationCodeRepository::new(db);
    for _ in 0..2 {
        repo.create(CreateCodeParams {
            user_id: user.id.clone(),
            email: None,
            code: "11111".to_string(),
            created_date: now,
            expiry_date: now + Duration::minutes(10),
            actor: "issuer".to_string(),
        })
        .await?;
    }

    assert_eq!(entity::prelude::ConfirmationCode::find().count(db).await?, 2);

    Ok(())
}
