use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfirmationCodeDto {
    pub id: String,
    pub user_id: String,
    pub email: Option<String>,
    pub code: String,
    pub expiry_date: DateTime<Utc>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

/// Body of `POST /verifyCode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VerifyCodeDto {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Body of `POST /users/{user_id}/email-validations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmailValidationDto {
    #[serde(default)]
    pub confirmation_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeStatusDto {
    NoCode,
    Valid,
    Expired,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CodeVerificationDto {
    pub status: CodeStatusDto,
}
