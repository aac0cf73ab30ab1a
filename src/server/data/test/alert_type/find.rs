use super::*;

/// Tests listing alert types.
///
/// Expected: Ok with alert types ordered by code
#[tokio::test]
async fn get_all_orders_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AlertType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AlertTypeFactory::new(db).code("JOB_BANK").build().await?;
    AlertTypeFactory::new(db).code("CPP").build().await?;

    let repo = AlertTypeRepository::new(db);
    let alert_types = repo.get_all().await?;

    let codes: Vec<_> = alert_types.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["CPP", "JOB_BANK"]);

    Ok(())
}

/// Tests finding an alert type by ID and by code.
///
/// Expected: Ok(Some) for both lookups
#[tokio::test]
async fn finds_by_id_and_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AlertType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alert_type = AlertTypeFactory::new(db).code("CPP").build().await?;

    let repo = AlertTypeRepository::new(db);

    let by_id = repo.find_by_id(&alert_type.id).await?.unwrap();
    assert_eq!(by_id.code, "CPP");
    let by_code = repo.find_by_code("CPP").await?.unwrap();
    assert_eq!(by_code.id, alert_type.id);

    Ok(())
}

/// Tests lookups for an alert type that does not exist.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AlertType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AlertTypeRepository::new(db);

    assert!(repo.find_by_id("missing").await?.is_none());
    assert!(repo.find_by_code("MISSING").await?.is_none());

    Ok(())
}
