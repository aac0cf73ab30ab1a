use super::*;

/// Tests listing languages.
///
/// Expected: Ok with languages ordered by code
#[tokio::test]
async fn returns_languages_ordered_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Language)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    LanguageFactory::new(db).code("FR").build().await?;
    LanguageFactory::new(db).code("EN").build().await?;

    let repo = LanguageRepository::new(db);
    let languages = repo.get_all().await?;

    let codes: Vec<_> = languages.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["EN", "FR"]);

    Ok(())
}

/// Tests listing when no languages are configured.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_languages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Language)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LanguageRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
