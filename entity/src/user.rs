use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub created_by: String,
    pub created_date: DateTimeUtc,
    pub last_modified_by: String,
    pub last_modified_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::confirmation_code::Entity")]
    ConfirmationCode,
    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscription,
    #[sea_orm(has_many = "super::user_attribute::Entity")]
    UserAttribute,
}

impl Related<super::confirmation_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfirmationCode.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl Related<super::user_attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAttribute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
