use anyhow::{Context, Result, anyhow};

pub const DEFAULT_MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub max_page_size: i64,
    pub otel_endpoint: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so that the
    /// parsing rules can be exercised without touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = database_url(&lookup)?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref().unwrap_or("true") {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn: u32 = lookup("DB_MAX_CONNECTION")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = lookup("DB_MIN_CONNECTION")
            .unwrap_or_else(|| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONNECTION ({db_min_conn}) must not exceed DB_MAX_CONNECTION ({db_max_conn})"
            ));
        }

        let max_page_size = match lookup("MAX_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<i64>()
                .context("MAX_PAGE_SIZE must be a valid integer")?,
            None => DEFAULT_MAX_PAGE_SIZE,
        };

        if max_page_size < 1 {
            return Err(anyhow!(
                "MAX_PAGE_SIZE must be at least 1, got {max_page_size}"
            ));
        }

        let otel_endpoint = lookup("OTEL_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_max_conn,
            db_min_conn,
            max_page_size,
            otel_endpoint,
        })
    }
}

// DATABASE_URL wins; otherwise the URL is assembled from the discrete
// DB_* variables used by the CSV tooling.
fn database_url<F>(lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
        return Ok(url);
    }

    let user = lookup("DB_USER").context("Missing environment variable: DATABASE_URL or DB_USER")?;
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let host = lookup("DB_HOST").context("Missing environment variable: DB_HOST")?;
    let port = lookup("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let name = lookup("DB_NAME").context("Missing environment variable: DB_NAME")?;

    port.parse::<u16>()
        .context("DB_PORT must be a valid u16 integer")?;

    Ok(format!("postgresql://{user}:{password}@{host}:{port}/{name}"))
}
