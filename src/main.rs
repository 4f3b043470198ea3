use fitplan::api::routes::create_routes;
use fitplan::config::{run_migrations, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    config.validate()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;

    // Create the application routes
    let app = create_routes(pool, &config.webhook_secret);

    // Start the server
    let addr = config.server_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("FitPlan server starting on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
