use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlertType::Table)
                    .if_not_exists()
                    .col(string(AlertType::Id).primary_key())
                    .col(string_uniq(AlertType::Code))
                    .col(string(AlertType::DescriptionEn))
                    .col(string(AlertType::DescriptionFr))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AlertType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AlertType {
    Table,
    Id,
    Code,
    DescriptionEn,
    DescriptionFr,
}
