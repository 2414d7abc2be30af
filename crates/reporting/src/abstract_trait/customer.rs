use crate::model::{Customer, CustomerDetail, Order};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::PageRequest,
        responses::{ApiResponse, CustomerDetailData, CustomerListData, CustomerOrdersData},
    },
    errors::{RepositoryError, ServiceError},
};
use std::sync::Arc;

pub type DynCustomerRepository = Arc<dyn CustomerRepositoryTrait + Send + Sync>;
pub type DynCustomerService = Arc<dyn CustomerServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerRepositoryTrait {
    async fn find_all(&self, page: &PageRequest) -> Result<(Vec<Customer>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<CustomerDetail>, RepositoryError>;
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;
    async fn find_orders(&self, id: i64) -> Result<Vec<Order>, RepositoryError>;
}

#[async_trait]
pub trait CustomerServiceTrait {
    async fn find_all(
        &self,
        page: &PageRequest,
    ) -> Result<ApiResponse<CustomerListData>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CustomerDetailData>, ServiceError>;
    async fn find_orders(&self, id: i64)
    -> Result<ApiResponse<CustomerOrdersData>, ServiceError>;
}
