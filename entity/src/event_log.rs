use sea_orm::entity::prelude::*;

/// Append-only audit record written by the background event writer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub actor: String,
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub event_type: String,
    pub source: String,
    pub created_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
