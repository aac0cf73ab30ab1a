use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::language::Language;

pub struct LanguageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LanguageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all languages ordered by code.
    pub async fn get_all(&self) -> Result<Vec<Language>, DbErr> {
        let languages = entity::prelude::Language::find()
            .order_by_asc(entity::language::Column::Code)
            .all(self.db)
            .await?;

        Ok(languages.into_iter().map(Language::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Language>, DbErr> {
        let language = entity::prelude::Language::find_by_id(id).one(self.db).await?;

        Ok(language.map(Language::from_entity))
    }

    /// Finds a language by its code, ISO code or MSCA alias.
    pub async fn find_by_code_or_alias(&self, code: &str) -> Result<Option<Language>, DbErr> {
        let language = entity::prelude::Language::find()
            .filter(
                Condition::any()
                    .add(entity::language::Column::Code.eq(code))
                    .add(entity::language::Column::IsoCode.eq(code))
                    .add(entity::language::Column::MscaCode.eq(code)),
            )
            .order_by_asc(entity::language::Column::Code)
            .one(self.db)
            .await?;

        Ok(language.map(Language::from_entity))
    }
}
