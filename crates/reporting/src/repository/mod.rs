pub mod coerce;
mod customer;
mod health;
mod order;
mod stats;

pub use self::customer::CustomerRepository;
pub use self::health::HealthRepository;
pub use self::order::{ORDER_COLUMNS, OrderRepository};
pub use self::stats::StatsRepository;

use crate::abstract_trait::{
    DynCustomerRepository, DynHealthRepository, DynOrderRepository, DynStatsRepository,
};
use shared::config::ConnectionPool;
use std::sync::Arc;

/// Every repository the services need, behind their traits.
#[derive(Clone)]
pub struct Repositories {
    pub customer: DynCustomerRepository,
    pub order: DynOrderRepository,
    pub stats: DynStatsRepository,
    pub health: DynHealthRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            customer: Arc::new(CustomerRepository::new(pool.clone())) as DynCustomerRepository,
            order: Arc::new(OrderRepository::new(pool.clone())) as DynOrderRepository,
            stats: Arc::new(StatsRepository::new(pool.clone())) as DynStatsRepository,
            health: Arc::new(HealthRepository::new(pool)) as DynHealthRepository,
        }
    }
}
