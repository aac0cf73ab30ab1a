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
                    .table(UserAttribute::Table)
                    .if_not_exists()
                    .col(string(UserAttribute::Id).primary_key())
                    .col(string(UserAttribute::UserId))
                    .col(string(UserAttribute::Name))
                    .col(string(UserAttribute::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_attribute_user_id")
                            .from(UserAttribute::Table, UserAttribute::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAttribute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAttribute {
    Table,
    Id,
    UserId,
    Name,
    Value,
}
