use crate::model::Statistics;
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, StatisticsData},
    errors::{RepositoryError, ServiceError},
};
use std::sync::Arc;

pub type DynStatsRepository = Arc<dyn StatsRepositoryTrait + Send + Sync>;
pub type DynStatsService = Arc<dyn StatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait StatsRepositoryTrait {
    async fn snapshot(&self) -> Result<Statistics, RepositoryError>;
}

#[async_trait]
pub trait StatsServiceTrait {
    async fn get_statistics(&self) -> Result<ApiResponse<StatisticsData>, ServiceError>;
}
