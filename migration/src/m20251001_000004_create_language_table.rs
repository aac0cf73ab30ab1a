use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Language::Table)
                    .if_not_exists()
                    .col(string(Language::Id).primary_key())
                    .col(string_uniq(Language::Code))
                    .col(string(Language::DescriptionEn))
                    .col(string(Language::DescriptionFr))
                    .col(string(Language::IsoCode))
                    .col(string(Language::MscaCode))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Language::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Language {
    Table,
    Id,
    Code,
    DescriptionEn,
    DescriptionFr,
    IsoCode,
    MscaCode,
}
