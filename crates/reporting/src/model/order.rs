use crate::repository::coerce;
use chrono::{DateTime, Utc};
use shared::{
    domain::responses::{
        OrderCustomerResponse, OrderDetailResponse, OrderResponse, OrderTimelineResponse,
        ProcessingMetricsResponse,
    },
    errors::RepositoryError,
};
use sqlx::FromRow;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub order_id: i64,
    pub user_id: Option<i64>,
    pub status: String,
    pub gender: Option<String>,
    pub num_of_item: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderDetailRow {
    pub order_id: i64,
    pub user_id: Option<i64>,
    pub status: String,
    pub gender: Option<String>,
    pub num_of_item: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
    pub customer_id: Option<i64>,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,
    pub customer_country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeline {
    pub created_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingMetrics {
    pub processing_time_days: Option<i64>,
    pub delivery_time_days: Option<i64>,
    pub total_fulfillment_days: Option<i64>,
}

impl ProcessingMetrics {
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let processing = days_between(timeline.created_at, timeline.shipped_at);
        let delivery = days_between(timeline.shipped_at, timeline.delivered_at);

        Self {
            processing_time_days: processing,
            delivery_time_days: delivery,
            total_fulfillment_days: processing.zip(delivery).map(|(p, d)| p + d),
        }
    }
}

/// Whole days between two instants; halves round up, so -1.5 becomes -1.
fn days_between(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Option<i64> {
    let (from, to) = (from?, to?);
    let millis = (to - from).num_milliseconds() as f64;

    Some((millis / MILLIS_PER_DAY + 0.5).floor() as i64)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCustomer {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: i64,
    pub user_id: Option<i64>,
    pub status: String,
    pub gender: Option<String>,
    pub num_of_item: i64,
    pub timeline: Timeline,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetail {
    pub order_id: i64,
    pub user_id: Option<i64>,
    pub status: String,
    pub gender: Option<String>,
    pub num_of_item: i64,
    pub timeline: Timeline,
    pub customer: Option<OrderCustomer>,
}

fn display_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [first, last]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();

    (!parts.is_empty()).then(|| parts.join(" "))
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            num_of_item: coerce::small_count("num_of_item", row.num_of_item)?,
            customer_name: display_name(
                row.customer_first_name.as_deref(),
                row.customer_last_name.as_deref(),
            ),
            order_id: row.order_id,
            user_id: row.user_id,
            status: row.status,
            gender: row.gender,
            timeline: Timeline {
                created_at: row.created_at,
                shipped_at: row.shipped_at,
                delivered_at: row.delivered_at,
                returned_at: row.returned_at,
            },
            customer_email: row.customer_email,
        })
    }
}

impl TryFrom<OrderDetailRow> for OrderDetail {
    type Error = RepositoryError;

    fn try_from(row: OrderDetailRow) -> Result<Self, Self::Error> {
        // The LEFT JOIN leaves every customer column NULL when the owner is gone.
        let customer = row.customer_id.map(|id| OrderCustomer {
            id,
            first_name: row.customer_first_name,
            last_name: row.customer_last_name,
            email: row.customer_email,
            city: row.customer_city,
            state: row.customer_state,
            country: row.customer_country,
        });

        Ok(Self {
            num_of_item: coerce::small_count("num_of_item", row.num_of_item)?,
            order_id: row.order_id,
            user_id: row.user_id,
            status: row.status,
            gender: row.gender,
            timeline: Timeline {
                created_at: row.created_at,
                shipped_at: row.shipped_at,
                delivered_at: row.delivered_at,
                returned_at: row.returned_at,
            },
            customer,
        })
    }
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        Self {
            order_id: value.order_id,
            user_id: value.user_id,
            status: value.status,
            gender: value.gender,
            num_of_item: value.num_of_item,
            created_at: value.timeline.created_at,
            shipped_at: value.timeline.shipped_at,
            delivered_at: value.timeline.delivered_at,
            returned_at: value.timeline.returned_at,
            customer_name: value.customer_name,
            customer_email: value.customer_email,
        }
    }
}

impl From<OrderDetail> for OrderDetailResponse {
    fn from(value: OrderDetail) -> Self {
        let metrics = ProcessingMetrics::from_timeline(&value.timeline);

        Self {
            order_id: value.order_id,
            user_id: value.user_id,
            status: value.status,
            gender: value.gender,
            num_of_item: value.num_of_item,
            customer: value.customer.map(|c| OrderCustomerResponse {
                id: c.id,
                first_name: c.first_name,
                last_name: c.last_name,
                email: c.email,
                city: c.city,
                state: c.state,
                country: c.country,
            }),
            timeline: OrderTimelineResponse {
                created_at: value.timeline.created_at,
                shipped_at: value.timeline.shipped_at,
                delivered_at: value.timeline.delivered_at,
                returned_at: value.timeline.returned_at,
            },
            processing_metrics: ProcessingMetricsResponse {
                processing_time_days: metrics.processing_time_days,
                delivery_time_days: metrics.delivery_time_days,
                total_fulfillment_days: metrics.total_fulfillment_days,
            },
        }
    }
}
