use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_null(User::Email))
                    .col(boolean(User::EmailVerified).default(false))
                    .col(string(User::CreatedBy))
                    .col(
                        timestamp_with_time_zone(User::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string(User::LastModifiedBy))
                    .col(
                        timestamp_with_time_zone(User::LastModifiedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    EmailVerified,
    CreatedBy,
    CreatedDate,
    LastModifiedBy,
    LastModifiedDate,
}
