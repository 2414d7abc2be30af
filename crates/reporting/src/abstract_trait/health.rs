use async_trait::async_trait;
use shared::{
    domain::responses::HealthResponse,
    errors::{RepositoryError, ServiceError},
};
use std::sync::Arc;

pub type DynHealthRepository = Arc<dyn HealthRepositoryTrait + Send + Sync>;
pub type DynHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

#[async_trait]
pub trait HealthRepositoryTrait {
    async fn ping(&self) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait HealthServiceTrait {
    async fn check(&self) -> Result<HealthResponse, ServiceError>;
}
