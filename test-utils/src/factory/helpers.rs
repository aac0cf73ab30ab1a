//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Actor recorded in audit columns of factory-created rows.
pub const TEST_ACTOR: &str = "test-utils";

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID v4 string for a primary key.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a subscription together with the user, alert type and language it references.
///
/// All entities are created with default values. Use the individual factories to
/// customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, alert_type, language, subscription))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_subscription_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::alert_type::Model,
        entity::language::Model,
        entity::subscription::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let alert_type = crate::factory::alert_type::create_alert_type(db).await?;
    let language = crate::factory::language::create_language(db).await?;
    let subscription =
        crate::factory::subscription::create_subscription(db, &user.id, &alert_type.id, &language.id)
            .await?;

    Ok((user, alert_type, language, subscription))
}
