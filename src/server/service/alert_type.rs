use sea_orm::DatabaseConnection;

use crate::server::{
    data::alert_type::AlertTypeRepository, error::AppError, model::alert_type::AlertType,
};

pub struct AlertTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<AlertType>, AppError> {
        let repo = AlertTypeRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<AlertType, AppError> {
        let repo = AlertTypeRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Alert type {} not found", id)))
    }
}
