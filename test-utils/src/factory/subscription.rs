//! Subscription factory for creating test subscriptions.

use crate::factory::helpers::{new_uuid, TEST_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a subscription linking an existing user, alert type and language.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user ID
/// - `alert_type_id` - Subscribed alert type ID
/// - `language_id` - Preferred language ID
///
/// # Returns
/// - `Ok(entity::subscription::Model)` - Created subscription
/// - `Err(DbErr)` - Database error during insert
pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: &str,
    alert_type_id: &str,
    language_id: &str,
) -> Result<entity::subscription::Model, DbErr> {
    let now = Utc::now();
    entity::subscription::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        user_id: ActiveValue::Set(user_id.to_string()),
        alert_type_id: ActiveValue::Set(alert_type_id.to_string()),
        language_id: ActiveValue::Set(language_id.to_string()),
        created_by: ActiveValue::Set(TEST_ACTOR.to_string()),
        created_date: ActiveValue::Set(now),
        last_modified_by: ActiveValue::Set(TEST_ACTOR.to_string()),
        last_modified_date: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
