use crate::{
    abstract_trait::{DynCustomerService, DynHealthService, DynOrderService, DynStatsService},
    repository::Repositories,
    service::{CustomerService, HealthService, OrderService, StatsService},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub customer_service: DynCustomerService,
    pub order_service: DynOrderService,
    pub stats_service: DynStatsService,
    pub health_service: DynHealthService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("customer_service", &"DynCustomerService")
            .field("order_service", &"DynOrderService")
            .field("stats_service", &"DynStatsService")
            .field("health_service", &"DynHealthService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repositories: Repositories, registry: &mut Registry) -> Self {
        let Repositories {
            customer,
            order,
            stats,
            health,
        } = repositories;

        let customer_service =
            Arc::new(CustomerService::new(customer, registry)) as DynCustomerService;
        let order_service = Arc::new(OrderService::new(order, registry)) as DynOrderService;
        let stats_service = Arc::new(StatsService::new(stats, registry)) as DynStatsService;
        let health_service = Arc::new(HealthService::new(health)) as DynHealthService;

        Self {
            customer_service,
            order_service,
            stats_service,
            health_service,
        }
    }
}
