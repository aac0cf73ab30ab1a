use sea_orm::DatabaseConnection;

use crate::server::{data::language::LanguageRepository, error::AppError, model::language::Language};

pub struct LanguageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LanguageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Language>, AppError> {
        let repo = LanguageRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Language, AppError> {
        let repo = LanguageRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", id)))
    }
}
