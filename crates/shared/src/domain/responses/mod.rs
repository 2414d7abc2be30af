mod api;
mod customer;
mod health;
mod order;
mod pagination;
mod stats;

pub use self::api::ApiResponse;
pub use self::customer::{
    CustomerDetailData, CustomerDetailResponse, CustomerListData, CustomerOrderStatistics,
    CustomerOrdersData, CustomerResponse, LocationResponse,
};
pub use self::health::HealthResponse;
pub use self::order::{
    OrderCustomerResponse, OrderDetailData, OrderDetailResponse, OrderFiltersResponse,
    OrderListData, OrderResponse, OrderTimelineResponse, OrdersByStatusData,
    ProcessingMetricsResponse,
};
pub use self::pagination::Pagination;
pub use self::stats::{StatisticsData, StatisticsResponse};
