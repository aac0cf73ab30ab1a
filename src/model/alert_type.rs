use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlertTypeDto {
    pub id: String,
    pub code: String,
    pub description_en: String,
    pub description_fr: String,
}
