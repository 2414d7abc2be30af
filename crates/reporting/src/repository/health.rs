use crate::abstract_trait::HealthRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct HealthRepository {
    db: ConnectionPool,
}

impl HealthRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthRepositoryTrait for HealthRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await
            .map(|_| ())
            .map_err(|e| {
                error!("❌ Database ping failed: {e:?}");
                RepositoryError::from(e)
            })
    }
}
