use super::*;

/// Tests resolving a language by its primary code and each alias.
///
/// Expected: Ok(Some) with the same language for all three codes
#[tokio::test]
async fn resolves_code_and_aliases() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Language)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = LanguageFactory::new(db)
        .code("EN")
        .iso_code("en")
        .msca_code("eng")
        .build()
        .await?;
    LanguageFactory::new(db)
        .code("FR")
        .iso_code("fr")
        .msca_code("fra")
        .build()
        .await?;

    let repo = LanguageRepository::new(db);

    for code in ["EN", "en", "eng"] {
        let found = repo.find_by_code_or_alias(code).await?;
        assert_eq!(found.map(|l| l.id), Some(english.id.clone()), "code {}", code);
    }

    Ok(())
}

/// Tests resolving an unknown code.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Language)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    LanguageFactory::new(db).code("EN").build().await?;

    let repo = LanguageRepository::new(db);

    assert!(repo.find_by_code_or_alias("de").await?.is_none());

    Ok(())
}
