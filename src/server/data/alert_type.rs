use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::alert_type::AlertType;

pub struct AlertTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all alert types ordered by code.
    pub async fn get_all(&self) -> Result<Vec<AlertType>, DbErr> {
        let alert_types = entity::prelude::AlertType::find()
            .order_by_asc(entity::alert_type::Column::Code)
            .all(self.db)
            .await?;

        Ok(alert_types.into_iter().map(AlertType::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<AlertType>, DbErr> {
        let alert_type = entity::prelude::AlertType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(alert_type.map(AlertType::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<AlertType>, DbErr> {
        let alert_type = entity::prelude::AlertType::find()
            .filter(entity::alert_type::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(alert_type.map(AlertType::from_entity))
    }
}
