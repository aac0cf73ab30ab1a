use crate::model::alert_type::AlertTypeDto;

/// A category of notification a user can subscribe to.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertType {
    pub id: String,
    pub code: String,
    pub description_en: String,
    pub description_fr: String,
}

impl AlertType {
    pub fn from_entity(entity: entity::alert_type::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            description_en: entity.description_en,
            description_fr: entity.description_fr,
        }
    }

    pub fn into_dto(self) -> AlertTypeDto {
        AlertTypeDto {
            id: self.id,
            code: self.code,
            description_en: self.description_en,
            description_fr: self.description_fr,
        }
    }
}
