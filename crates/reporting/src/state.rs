use crate::{di::DependenciesInject, repository::Repositories};
use prometheus_client::registry::Registry;
use shared::{
    config::{Config, ConnectionPool},
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
    pub max_page_size: i64,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .field("system_metrics", &self.system_metrics)
            .field("max_page_size", &self.max_page_size)
            .finish()
    }
}

impl AppState {
    /// Postgres-backed state; also starts the process metrics sampler.
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let state = Self::from_repositories(Repositories::postgres(pool), config.max_page_size);

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        state
    }

    pub fn from_repositories(repositories: Repositories, max_page_size: i64) -> Self {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(repositories, &mut registry);
        system_metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
            max_page_size,
        }
    }
}
