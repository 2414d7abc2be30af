use crate::abstract_trait::{CustomerServiceTrait, DynCustomerRepository};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::{
        requests::PageRequest,
        responses::{
            ApiResponse, CustomerDetailData, CustomerListData, CustomerOrdersData, Pagination,
        },
    },
    errors::ServiceError,
    utils::{Metrics, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct CustomerService {
    repository: DynCustomerRepository,
    tracer: OperationTracer,
}

impl CustomerService {
    pub fn new(repository: DynCustomerRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "customer_service");

        Self {
            repository,
            tracer: OperationTracer::new("customer-service", metrics),
        }
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn find_all(
        &self,
        page: &PageRequest,
    ) -> Result<ApiResponse<CustomerListData>, ServiceError> {
        info!(
            "🔍 Listing customers | Page: {}, Limit: {}",
            page.page, page.limit
        );

        let ctx = self.tracer.start(
            "find_all",
            vec![
                KeyValue::new("page", page.page),
                KeyValue::new("limit", page.limit),
            ],
        );

        match self.repository.find_all(page).await {
            Ok((customers, total)) => {
                let msg = format!("Found {} customers of {total}", customers.len());
                self.tracer.complete_success(&ctx, &msg);

                Ok(ApiResponse::ok(CustomerListData {
                    customers: customers.into_iter().map(Into::into).collect(),
                    pagination: Pagination::new(page, total),
                }))
            }
            Err(e) => {
                error!("❌ Failed to list customers: {e:?}");
                self.tracer
                    .complete_error(&ctx, &format!("Failed to list customers: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CustomerDetailData>, ServiceError> {
        info!("🆔 Finding customer {id}");

        let ctx = self
            .tracer
            .start("find_by_id", vec![KeyValue::new("customer.id", id)]);

        match self.repository.find_by_id(id).await {
            Ok(Some(customer)) => {
                self.tracer
                    .complete_success(&ctx, &format!("Found customer {id}"));

                Ok(ApiResponse::ok(CustomerDetailData {
                    customer: customer.into(),
                }))
            }
            Ok(None) => {
                self.tracer
                    .complete_error(&ctx, &format!("Customer {id} not found"));
                Err(ServiceError::NotFound("Customer not found".into()))
            }
            Err(e) => {
                error!("❌ Failed to fetch customer {id}: {e:?}");
                self.tracer
                    .complete_error(&ctx, &format!("Failed to fetch customer {id}: {e}"));
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_orders(
        &self,
        id: i64,
    ) -> Result<ApiResponse<CustomerOrdersData>, ServiceError> {
        info!("📦 Finding orders of customer {id}");

        let ctx = self
            .tracer
            .start("find_orders", vec![KeyValue::new("customer.id", id)]);

        let lookup = match self.repository.exists(id).await {
            Ok(true) => self.repository.find_orders(id).await.map(Some),
            Ok(false) => Ok(None),
            Err(e) => Err(e),
        };

        match lookup {
            Ok(Some(orders)) => {
                let total_orders = orders.len() as i64;
                self.tracer.complete_success(
                    &ctx,
                    &format!("Found {total_orders} orders of customer {id}"),
                );

                Ok(ApiResponse::ok(CustomerOrdersData {
                    customer_id: id,
                    orders: orders.into_iter().map(Into::into).collect(),
                    total_orders,
                }))
            }
            Ok(None) => {
                self.tracer
                    .complete_error(&ctx, &format!("Customer {id} not found"));
                Err(ServiceError::NotFound("Customer not found".into()))
            }
            Err(e) => {
                error!("❌ Failed to fetch orders of customer {id}: {e:?}");
                self.tracer.complete_error(
                    &ctx,
                    &format!("Failed to fetch orders of customer {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
