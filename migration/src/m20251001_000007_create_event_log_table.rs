use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventLog::Table)
                    .if_not_exists()
                    .col(string(EventLog::Id).primary_key())
                    .col(string(EventLog::Actor))
                    .col(string(EventLog::Description))
                    .col(text_null(EventLog::Details))
                    .col(string(EventLog::EventType))
                    .col(string(EventLog::Source))
                    .col(
                        timestamp_with_time_zone(EventLog::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventLog {
    Table,
    Id,
    Actor,
    Description,
    Details,
    EventType,
    Source,
    CreatedDate,
}
