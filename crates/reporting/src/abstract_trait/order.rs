use crate::{
    domain::OrderFilter,
    model::{Order, OrderDetail},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{FindAllOrders, FindOrdersByStatus, PageRequest},
        responses::{ApiResponse, OrderDetailData, OrderListData, OrdersByStatusData},
    },
    errors::{RepositoryError, ServiceError},
};
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    async fn find_all(
        &self,
        filter: &OrderFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id(&self, order_id: i64) -> Result<Option<OrderDetail>, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn find_all(&self, req: &FindAllOrders)
    -> Result<ApiResponse<OrderListData>, ServiceError>;
    async fn find_by_id(&self, order_id: i64)
    -> Result<ApiResponse<OrderDetailData>, ServiceError>;
    async fn find_by_status(
        &self,
        req: &FindOrdersByStatus,
    ) -> Result<ApiResponse<OrdersByStatusData>, ServiceError>;
}
