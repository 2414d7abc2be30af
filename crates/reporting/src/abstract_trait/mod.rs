mod customer;
mod health;
mod order;
mod stats;

pub use self::customer::{
    CustomerRepositoryTrait, CustomerServiceTrait, DynCustomerRepository, DynCustomerService,
};
pub use self::health::{
    DynHealthRepository, DynHealthService, HealthRepositoryTrait, HealthServiceTrait,
};
pub use self::order::{DynOrderRepository, DynOrderService, OrderRepositoryTrait, OrderServiceTrait};
pub use self::stats::{DynStatsRepository, DynStatsService, StatsRepositoryTrait, StatsServiceTrait};
