use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LanguageDto {
    pub id: String,
    pub code: String,
    pub description_en: String,
    pub description_fr: String,
    pub iso_code: String,
    pub msca_code: String,
}
