use leavetrack::bootstrap;
use leavetrack::config::Config;
use leavetrack::infrastructure::http::router::build_router;
use leavetrack::infrastructure::observability;
use leavetrack::infrastructure::persistence::Database;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // Seed reference holidays
    if let Err(e) = bootstrap::seed_reference_data(&db, &config).await {
        tracing::error!("Failed to seed holidays: {}", e);
        return Err(e.into());
    }

    // Build application state (and start background services)
    let state = bootstrap::build_app_state(db, &config);

    // Build router
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
