use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::CodeSettings, error::AppError, service::confirmation_code::ConfirmationCodeService,
};

/// Starts the expired confirmation code sweep.
///
/// Runs on `schedule` (six field cron, seconds first) and deletes every code whose
/// expiry has passed.
///
/// # Arguments
/// - `db`: Database connection
/// - `settings`: Code settings handed to the confirmation code service
/// - `schedule`: Cron expression, e.g. `0 0 * * * *` for hourly
pub async fn start_scheduler(
    db: DatabaseConnection,
    settings: CodeSettings,
    schedule: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_expired_codes(&db, settings).await {
                tracing::error!("Error sweeping expired confirmation codes: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Confirmation code sweep scheduled ({})", schedule);

    Ok(())
}

/// Deletes codes that expired before now.
async fn sweep_expired_codes(db: &DatabaseConnection, settings: CodeSettings) -> Result<(), AppError> {
    let removed = ConfirmationCodeService::new(db, settings)
        .sweep_expired(Utc::now())
        .await?;

    if removed > 0 {
        tracing::info!("Removed {} expired confirmation codes", removed);
    }

    Ok(())
}
