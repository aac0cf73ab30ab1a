use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::server::{config::Config, error::AppError};

/// Connects to the subscription database and brings its schema up to date.
///
/// Migrations also seed the language and alert type reference rows, so a fresh
/// database is usable as soon as this returns.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or to apply a migration
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    let pending = Migrator::get_pending_migrations(&db).await?.len();
    Migrator::up(&db, None).await?;

    tracing::info!("Database ready, {} pending migration(s) applied", pending);

    Ok(db)
}

/// Counts the reference rows subscriptions resolve against.
///
/// Subscribing fails with 404 for every code while either table is empty, so an
/// empty table is logged as a warning rather than failing startup.
///
/// # Returns
/// - `Ok((languages, alert_types))` - Row counts of both reference tables
/// - `Err(AppError::DbErr)` - Either count query failed
pub async fn check_reference_data(db: &DatabaseConnection) -> Result<(u64, u64), AppError> {
    let languages = entity::prelude::Language::find().count(db).await?;
    let alert_types = entity::prelude::AlertType::find().count(db).await?;

    if languages == 0 {
        tracing::warn!("No languages configured, subscriptions cannot be created");
    }
    if alert_types == 0 {
        tracing::warn!("No alert types configured, subscriptions cannot be created");
    }

    tracing::info!(
        "Reference data loaded: {} language(s), {} alert type(s)",
        languages,
        alert_types
    );

    Ok((languages, alert_types))
}
