use crate::domain::responses::Pagination;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: i64,
    pub user_id: Option<i64>,
    pub status: String,
    pub gender: Option<String>,
    pub num_of_item: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderCustomerResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderTimelineResponse {
    pub created_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProcessingMetricsResponse {
    pub processing_time_days: Option<i64>,
    pub delivery_time_days: Option<i64>,
    pub total_fulfillment_days: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailResponse {
    pub order_id: i64,
    pub user_id: Option<i64>,
    pub status: String,
    pub gender: Option<String>,
    pub num_of_item: i64,
    /// `null` when the owning customer row does not exist.
    pub customer: Option<OrderCustomerResponse>,
    pub timeline: OrderTimelineResponse,
    pub processing_metrics: ProcessingMetricsResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderFiltersResponse {
    pub status: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderListData {
    pub orders: Vec<OrderResponse>,
    pub pagination: Pagination,
    pub filters: OrderFiltersResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailData {
    pub order: OrderDetailResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrdersByStatusData {
    pub status_filter: String,
    pub orders: Vec<OrderResponse>,
    pub pagination: Pagination,
}
