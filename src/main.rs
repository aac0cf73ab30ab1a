mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::AppError,
    event::{writer, EventPublisher},
    router,
    scheduler::code_sweep,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::check_reference_data(&db).await?;

    let (events, receiver) = EventPublisher::channel(config.event_source.clone());
    let writer = writer::spawn_writer(db.clone(), receiver);

    // Start expired code sweep
    let scheduler_db = db.clone();
    let scheduler_settings = config.code;
    let schedule = config.code_sweep_schedule.clone();
    tokio::spawn(async move {
        if let Err(e) =
            code_sweep::start_scheduler(scheduler_db, scheduler_settings, &schedule).await
        {
            tracing::error!("Confirmation code sweep scheduler error: {}", e);
        }
    });

    let (api_router, api) = router::router();
    let app = api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(db, config.code, events));

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    tracing::info!("Starting server on {}", config.server_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router held the last publisher, so the writer drains and stops.
    if let Err(e) = writer.await {
        tracing::error!("Audit writer task failed: {}", e);
    }

    tracing::info!("Server stopped gracefully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutting down gracefully...");
}
