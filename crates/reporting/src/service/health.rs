use crate::abstract_trait::{DynHealthRepository, HealthServiceTrait};
use async_trait::async_trait;
use chrono::Utc;
use shared::{domain::responses::HealthResponse, errors::ServiceError};
use tracing::error;

#[derive(Clone)]
pub struct HealthService {
    repository: DynHealthRepository,
}

impl HealthService {
    pub fn new(repository: DynHealthRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> Result<HealthResponse, ServiceError> {
        self.repository.ping().await.map_err(|e| {
            error!("❌ Health check failed: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(HealthResponse {
            success: true,
            message: "Server is healthy".into(),
            database: "connected".into(),
            timestamp: Utc::now(),
        })
    }
}
