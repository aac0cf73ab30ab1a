use crate::model::language::LanguageDto;

/// A language notifications can be delivered in.
///
/// Besides its own `code`, a language is addressable by its ISO 639-1 code (`en`) and by
/// the three letter alias used by MSCA (`eng`).
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub id: String,
    pub code: String,
    pub description_en: String,
    pub description_fr: String,
    pub iso_code: String,
    pub msca_code: String,
}

impl Language {
    pub fn from_entity(entity: entity::language::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            description_en: entity.description_en,
            description_fr: entity.description_fr,
            iso_code: entity.iso_code,
            msca_code: entity.msca_code,
        }
    }

    pub fn into_dto(self) -> LanguageDto {
        LanguageDto {
            id: self.id,
            code: self.code,
            description_en: self.description_en,
            description_fr: self.description_fr,
            iso_code: self.iso_code,
            msca_code: self.msca_code,
        }
    }
}
