use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User, m20251001_000004_create_language_table::Language,
    m20251001_000005_create_alert_type_table::AlertType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(string(Subscription::Id).primary_key())
                    .col(string(Subscription::UserId))
                    .col(string(Subscription::AlertTypeId))
                    .col(string(Subscription::LanguageId))
                    .col(string(Subscription::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Subscription::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string(Subscription::LastModifiedBy))
                    .col(
                        timestamp_with_time_zone(Subscription::LastModifiedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_user_id")
                            .from(Subscription::Table, Subscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_alert_type_id")
                            .from(Subscription::Table, Subscription::AlertTypeId)
                            .to(AlertType::Table, AlertType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_language_id")
                            .from(Subscription::Table, Subscription::LanguageId)
                            .to(Language::Table, Language::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One subscription per user and alert type
        manager
            .create_index(
                Index::create()
                    .name("uq_subscription_user_alert_type")
                    .table(Subscription::Table)
                    .col(Subscription::UserId)
                    .col(Subscription::AlertTypeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    Id,
    UserId,
    AlertTypeId,
    LanguageId,
    CreatedBy,
    CreatedDate,
    LastModifiedBy,
    LastModifiedDate,
}
