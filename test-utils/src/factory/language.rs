//! Language factory for creating reference data in tests.

use crate::factory::helpers::{new_uuid, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for languages.
///
/// Defaults to unique code `"L{n}"`, ISO code `"l{n}"` and MSCA code `"lang{n}"`.
pub struct LanguageFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    iso_code: String,
    msca_code: String,
}

impl<'a> LanguageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("L{}", id),
            iso_code: format!("l{}", id),
            msca_code: format!("lang{}", id),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn iso_code(mut self, iso_code: impl Into<String>) -> Self {
        self.iso_code = iso_code.into();
        self
    }

    pub fn msca_code(mut self, msca_code: impl Into<String>) -> Self {
        self.msca_code = msca_code.into();
        self
    }

    pub async fn build(self) -> Result<entity::language::Model, DbErr> {
        entity::language::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            description_en: ActiveValue::Set(format!("{} (en)", self.code)),
            description_fr: ActiveValue::Set(format!("{} (fr)", self.code)),
            code: ActiveValue::Set(self.code),
            iso_code: ActiveValue::Set(self.iso_code),
            msca_code: ActiveValue::Set(self.msca_code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a language with unique codes.
pub async fn create_language(db: &DatabaseConnection) -> Result<entity::language::Model, DbErr> {
    LanguageFactory::new(db).build().await
}
