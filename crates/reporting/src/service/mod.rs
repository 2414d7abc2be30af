mod customer;
mod health;
mod order;
mod stats;

pub use self::customer::CustomerService;
pub use self::health::HealthService;
pub use self::order::OrderService;
pub use self::stats::StatsService;
