pub mod abstract_trait;
pub mod di;
pub mod domain;
pub mod handler;
pub mod model;
pub mod repository;
pub mod seed;
pub mod service;
pub mod state;

use anyhow::{Context, Result};
use shared::config::ConnectionPool;
use tracing::info;

pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    info!("🗃️ Database migrations applied");
    Ok(())
}
