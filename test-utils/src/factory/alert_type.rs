//! Alert type factory for creating reference data in tests.

use crate::factory::helpers::{new_uuid, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for alert types. Defaults to a unique `"ALERT_{n}"` code.
pub struct AlertTypeFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
}

impl<'a> AlertTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("ALERT_{}", next_id()),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub async fn build(self) -> Result<entity::alert_type::Model, DbErr> {
        entity::alert_type::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            description_en: ActiveValue::Set(format!("{} (en)", self.code)),
            description_fr: ActiveValue::Set(format!("{} (fr)", self.code)),
            code: ActiveValue::Set(self.code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an alert type with a unique code.
pub async fn create_alert_type(db: &DatabaseConnection) -> Result<entity::alert_type::Model, DbErr> {
    AlertTypeFactory::new(db).build().await
}
