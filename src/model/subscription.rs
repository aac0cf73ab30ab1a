use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: String,
    pub user_id: String,
    pub alert_type_code: String,
    pub language_code: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSubscriptionDto {
    #[serde(default)]
    pub alert_type_code: String,
    #[serde(default)]
    pub language_code: String,
}

/// Patchable view of a subscription. Only the preferred language can change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateSubscriptionDto {
    #[serde(default)]
    pub language_code: String,
}
