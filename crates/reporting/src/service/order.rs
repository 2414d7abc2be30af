use crate::{
    abstract_trait::{DynOrderRepository, OrderServiceTrait},
    domain::OrderFilter,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::{
        requests::{FindAllOrders, FindOrdersByStatus},
        responses::{
            ApiResponse, OrderDetailData, OrderFiltersResponse, OrderListData, OrdersByStatusData,
            Pagination,
        },
    },
    errors::ServiceError,
    utils::{Metrics, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderService {
    repository: DynOrderRepository,
    tracer: OperationTracer,
}

impl OrderService {
    pub fn new(repository: DynOrderRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "order_service");

        Self {
            repository,
            tracer: OperationTracer::new("order-service", metrics),
        }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponse<OrderListData>, ServiceError> {
        info!(
            "🔍 Listing orders | Page: {}, Limit: {}, Status: {:?}, User: {:?}",
            req.page.page, req.page.limit, req.status, req.user_id
        );

        let mut attributes = vec![
            KeyValue::new("page", req.page.page),
            KeyValue::new("limit", req.page.limit),
        ];
        if let Some(status) = &req.status {
            attributes.push(KeyValue::new("status", status.to_string()));
        }
        if let Some(user_id) = req.user_id {
            attributes.push(KeyValue::new("user_id", user_id));
        }

        let ctx = self.tracer.start("find_all", attributes);
        let filter = OrderFilter::from(req);

        match self.repository.find_all(&filter, &req.page).await {
            Ok((orders, total)) => {
                self.tracer
                    .complete_success(&ctx, &format!("Found {} orders of {total}", orders.len()));

                Ok(ApiResponse::ok(OrderListData {
                    orders: orders.into_iter().map(Into::into).collect(),
                    pagination: Pagination::new(&req.page, total),
                    filters: OrderFiltersResponse {
                        status: req.status.as_ref().map(ToString::to_string),
                        user_id: req.user_id,
                    },
                }))
            }
            Err(e) => {
                error!("❌ Failed to list orders: {e:?}");
                self.tracer
                    .complete_error(&ctx, &format!("Failed to list orders: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(
        &self,
        order_id: i64,
    ) -> Result<ApiResponse<OrderDetailData>, ServiceError> {
        info!("🆔 Finding order {order_id}");

        let ctx = self
            .tracer
            .start("find_by_id", vec![KeyValue::new("order.id", order_id)]);

        match self.repository.find_by_id(order_id).await {
            Ok(Some(order)) => {
                self.tracer
                    .complete_success(&ctx, &format!("Found order {order_id}"));

                Ok(ApiResponse::ok(OrderDetailData {
                    order: order.into(),
                }))
            }
            Ok(None) => {
                self.tracer
                    .complete_error(&ctx, &format!("Order {order_id} not found"));
                Err(ServiceError::NotFound("Order not found".into()))
            }
            Err(e) => {
                error!("❌ Failed to fetch order {order_id}: {e:?}");
                self.tracer
                    .complete_error(&ctx, &format!("Failed to fetch order {order_id}: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_status(
        &self,
        req: &FindOrdersByStatus,
    ) -> Result<ApiResponse<OrdersByStatusData>, ServiceError> {
        info!(
            "🏷️ Listing {} orders | Page: {}, Limit: {}",
            req.status, req.page.page, req.page.limit
        );

        let ctx = self.tracer.start(
            "find_by_status",
            vec![
                KeyValue::new("status", req.status.as_str()),
                KeyValue::new("page", req.page.page),
                KeyValue::new("limit", req.page.limit),
            ],
        );

        let filter = OrderFilter::by_status(req.status);

        match self.repository.find_all(&filter, &req.page).await {
            Ok((orders, total)) => {
                self.tracer.complete_success(
                    &ctx,
                    &format!("Found {} {} orders of {total}", orders.len(), req.status),
                );

                Ok(ApiResponse::ok(OrdersByStatusData {
                    status_filter: req.status.as_str().to_string(),
                    orders: orders.into_iter().map(Into::into).collect(),
                    pagination: Pagination::new(&req.page, total),
                }))
            }
            Err(e) => {
                error!("❌ Failed to list {} orders: {e:?}", req.status);
                self.tracer
                    .complete_error(&ctx, &format!("Failed to list {} orders: {e}", req.status));
                Err(ServiceError::Repo(e))
            }
        }
    }
}
