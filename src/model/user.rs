use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserAttributeDto {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub attributes: Vec<UserAttributeDto>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub attributes: Vec<UserAttributeDto>,
}

/// Patchable view of a user.
///
/// PATCH requests are applied to this snapshot, so it lists every field a client may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub email: Option<String>,
}
