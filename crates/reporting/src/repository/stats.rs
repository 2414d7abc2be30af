use crate::{
    abstract_trait::StatsRepositoryTrait,
    model::{Statistics, StatisticsRow},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct StatsRepository {
    db: ConnectionPool,
}

impl StatsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatsRepositoryTrait for StatsRepository {
    async fn snapshot(&self) -> Result<Statistics, RepositoryError> {
        info!("📊 Computing statistics snapshot");

        let row = sqlx::query_as::<_, StatisticsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_customers,
                COUNT(*) AS total_orders,
                AVG(o.num_of_item)::FLOAT8 AS average_items_per_order,
                SUM(o.num_of_item)::BIGINT AS total_items_sold,
                COUNT(*) FILTER (WHERE LOWER(o.status) = 'delivered') AS delivered_orders,
                COUNT(*) FILTER (WHERE LOWER(o.status) = 'returned') AS returned_orders,
                (SELECT COUNT(DISTINCT traffic_source) FROM users) AS traffic_sources
            FROM orders o
            "#,
        )
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to compute statistics: {e:?}");
            RepositoryError::from(e)
        })?;

        Statistics::try_from(row)
    }
}
