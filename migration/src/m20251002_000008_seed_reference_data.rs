use sea_orm_migration::prelude::*;

use super::{
    m20251001_000004_create_language_table::Language,
    m20251001_000005_create_alert_type_table::AlertType,
};

/// (id, code, description_en, description_fr, iso_code, msca_code)
const LANGUAGES: [(&str, &str, &str, &str, &str, &str); 2] = [
    (
        "4d6a0a5e-7d0b-4a53-9a5b-0c0a2f5e8b01",
        "ENG",
        "English",
        "Anglais",
        "en",
        "eng",
    ),
    (
        "4d6a0a5e-7d0b-4a53-9a5b-0c0a2f5e8b02",
        "FRA",
        "French",
        "Français",
        "fr",
        "fra",
    ),
];

/// (id, code, description_en, description_fr)
const ALERT_TYPES: [(&str, &str, &str, &str); 2] = [
    (
        "9f1c3b2a-6e4d-4c8b-8a7f-1d2e3f4a5b01",
        "CDCP",
        "Canadian Dental Care Plan updates",
        "Mises à jour du Régime canadien de soins dentaires",
    ),
    (
        "9f1c3b2a-6e4d-4c8b-8a7f-1d2e3f4a5b02",
        "CDCP_ELIGIBILITY",
        "Canadian Dental Care Plan eligibility notices",
        "Avis d'admissibilité au Régime canadien de soins dentaires",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut languages = Query::insert()
            .into_table(Language::Table)
            .columns([
                Language::Id,
                Language::Code,
                Language::DescriptionEn,
                Language::DescriptionFr,
                Language::IsoCode,
                Language::MscaCode,
            ])
            .to_owned();
        for (id, code, en, fr, iso, msca) in LANGUAGES {
            languages.values_panic([
                id.into(),
                code.into(),
                en.into(),
                fr.into(),
                iso.into(),
                msca.into(),
            ]);
        }
        manager.exec_stmt(languages).await?;

        let mut alert_types = Query::insert()
            .into_table(AlertType::Table)
            .columns([
                AlertType::Id,
                AlertType::Code,
                AlertType::DescriptionEn,
                AlertType::DescriptionFr,
            ])
            .to_owned();
        for (id, code, en, fr) in ALERT_TYPES {
            alert_types.values_panic([id.into(), code.into(), en.into(), fr.into()]);
        }
        manager.exec_stmt(alert_types).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(AlertType::Table)
                    .and_where(
                        Expr::col(AlertType::Id).is_in(ALERT_TYPES.iter().map(|row| row.0)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Language::Table)
                    .and_where(Expr::col(Language::Id).is_in(LANGUAGES.iter().map(|row| row.0)))
                    .to_owned(),
            )
            .await
    }
}
