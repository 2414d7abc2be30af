use anyhow::{Context, Result, anyhow};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub page_size: i64,
}

impl DashboardConfig {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(anyhow!(
                "API_BASE_URL must start with http:// or https://, got '{api_base_url}'"
            ));
        }

        let page_size = match lookup("PAGE_SIZE") {
            Some(raw) => raw
                .parse::<i64>()
                .context("PAGE_SIZE must be a valid integer")?,
            None => DEFAULT_PAGE_SIZE,
        };

        if page_size < 1 {
            return Err(anyhow!("PAGE_SIZE must be at least 1, got {page_size}"));
        }

        Ok(Self {
            api_base_url,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<DashboardConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_api() {
        let cfg = config(&[]).unwrap();

        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let cfg = config(&[("API_BASE_URL", "https://reports.internal/api/")]).unwrap();

        assert_eq!(cfg.api_base_url, "https://reports.internal/api");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("API_BASE_URL", "localhost:3000")]).is_err());
        assert!(config(&[("PAGE_SIZE", "ten")]).is_err());
        assert!(config(&[("PAGE_SIZE", "0")]).is_err());
    }
}
