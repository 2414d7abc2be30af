use anyhow::{Context, Result};
use dashboard::{
    app::App,
    client::{DynReportApi, HttpReportApi},
    config::DashboardConfig,
};
use dotenv::dotenv;
use shared::utils::{LogOptions, init_logger};
use std::sync::Arc;
use tracing::{error, info};

fn main() -> Result<()> {
    dotenv().ok();

    let config = DashboardConfig::init().context("Failed to load dashboard configuration")?;

    // The terminal belongs to the UI, so logs only go to the rolling file.
    let _guard = init_logger(&LogOptions::from_env("dashboard").without_console(), None)
        .context("Failed to initialize logger")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let api: DynReportApi = Arc::new(
        HttpReportApi::new(config.api_base_url.as_str()).context("Failed to build HTTP client")?,
    );

    info!(
        "📊 Dashboard starting against {} (page size {})",
        config.api_base_url, config.page_size
    );

    App::new(api, config.page_size, runtime.handle().clone())
        .run()
        .inspect_err(|e| error!("❌ Dashboard terminated: {e}"))
        .context("Terminal error")?;

    Ok(())
}
