use anyhow::{Context, Result};
use reporting::{handler::AppRouter, run_migrations, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::{LogOptions, Telemetry, init_logger},
};
use tracing::{error, info};

const SERVICE_NAME: &str = "reporting-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::init(SERVICE_NAME, config.otel_endpoint.as_deref())
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(
        &LogOptions::from_env(SERVICE_NAME),
        telemetry.logger_provider(),
    )?;

    if !telemetry.is_exporting() {
        info!("📴 OTEL_ENDPOINT not set, telemetry export disabled");
    }

    let db_pool =
        ConnectionManager::new_pool(&config.database_url, config.db_min_conn, config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool).await?;
    }

    let state = AppState::new(db_pool, &config);

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down...");

    if let Err(e) = telemetry.shutdown() {
        error!("Failed to shutdown telemetry: {e}");
    }

    Ok(())
}
