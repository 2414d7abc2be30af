mod customer;
mod order;
mod stats;

pub use self::customer::{
    Customer, CustomerDetail, CustomerDetailRow, CustomerListRow, Location, OrderSummary,
};
pub use self::order::{
    Order, OrderCustomer, OrderDetail, OrderDetailRow, OrderRow, ProcessingMetrics, Timeline,
};
pub use self::stats::{Statistics, StatisticsRow};
