use crate::abstract_trait::{DynStatsRepository, StatsServiceTrait};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::{ApiResponse, StatisticsData},
    errors::ServiceError,
    utils::{Metrics, OperationTracer},
};
use tracing::error;

#[derive(Clone)]
pub struct StatsService {
    repository: DynStatsRepository,
    tracer: OperationTracer,
}

impl StatsService {
    pub fn new(repository: DynStatsRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "stats_service");

        Self {
            repository,
            tracer: OperationTracer::new("stats-service", metrics),
        }
    }
}

#[async_trait]
impl StatsServiceTrait for StatsService {
    async fn get_statistics(&self) -> Result<ApiResponse<StatisticsData>, ServiceError> {
        let ctx = self.tracer.start("get_statistics", vec![]);

        match self.repository.snapshot().await {
            Ok(stats) => {
                self.tracer.complete_success(
                    &ctx,
                    &format!(
                        "Statistics over {} customers and {} orders",
                        stats.total_customers, stats.total_orders
                    ),
                );

                Ok(ApiResponse::ok(StatisticsData {
                    statistics: stats.into(),
                }))
            }
            Err(e) => {
                error!("❌ Failed to compute statistics: {e:?}");
                self.tracer
                    .complete_error(&ctx, &format!("Failed to compute statistics: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }
}
