use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfirmationCode::Table)
                    .if_not_exists()
                    .col(string(ConfirmationCode::Id).primary_key())
                    .col(string(ConfirmationCode::UserId))
                    .col(string_null(ConfirmationCode::Email))
                    .col(string_len(ConfirmationCode::Code, 8))
                    .col(timestamp_with_time_zone(ConfirmationCode::ExpiryDate))
                    .col(string(ConfirmationCode::CreatedBy))
                    .col(
                        timestamp_with_time_zone(ConfirmationCode::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string(ConfirmationCode::LastModifiedBy))
                    .col(
                        timestamp_with_time_zone(ConfirmationCode::LastModifiedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_confirmation_code_user_id")
                            .from(ConfirmationCode::Table, ConfirmationCode::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The expiry sweep scans by expiry date
        manager
            .create_index(
                Index::create()
                    .name("idx_confirmation_code_expiry_date")
                    .table(ConfirmationCode::Table)
                    .col(ConfirmationCode::ExpiryDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConfirmationCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConfirmationCode {
    Table,
    Id,
    UserId,
    Email,
    Code,
    ExpiryDate,
    CreatedBy,
    CreatedDate,
    LastModifiedBy,
    LastModifiedDate,
}
