use anyhow::{Context, Result};
use reporting::{
    run_migrations,
    seed::{SeedTable, load_csv},
};
use shared::{
    config::{Config, ConnectionManager},
    utils::{LogOptions, init_logger},
};
use std::path::PathBuf;
use tracing::info;

fn csv_path(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
        .into()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let _log_guard = init_logger(&LogOptions::from_env("reporting-seed"), None)?;

    let config = Config::init().context("Failed to load configuration")?;

    let db_pool =
        ConnectionManager::new_pool(&config.database_url, config.db_min_conn, config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

    run_migrations(&db_pool).await?;

    let sources = [
        (SeedTable::Users, csv_path("USERS_CSV", "./users.csv")),
        (SeedTable::Orders, csv_path("ORDERS_CSV", "./orders.csv")),
    ];

    for (table, path) in sources {
        let rows = load_csv(&db_pool, table, &path)
            .await
            .with_context(|| format!("Failed to load {} into {}", path.display(), table.name()))?;

        info!("✅ Copied {rows} rows into {}", table.name());
    }

    info!("🎉 Data successfully uploaded to the database");

    Ok(())
}
