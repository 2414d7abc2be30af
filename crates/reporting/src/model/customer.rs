use crate::repository::coerce;
use chrono::{DateTime, Utc};
use shared::{
    domain::responses::{
        CustomerDetailResponse, CustomerOrderStatistics, CustomerResponse, LocationResponse,
    },
    errors::RepositoryError,
};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CustomerListRow {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub traffic_source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub order_count: Option<i64>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CustomerDetailRow {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub traffic_source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_orders: Option<i64>,
    pub delivered_orders: Option<i64>,
    pub returned_orders: Option<i64>,
    pub total_items: Option<i64>,
    pub first_order_date: Option<DateTime<Utc>>,
    pub last_order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub traffic_source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub order_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub total_orders: i64,
    pub delivered_orders: i64,
    pub returned_orders: i64,
    pub total_items: i64,
    pub first_order_date: Option<DateTime<Utc>>,
    pub last_order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetail {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub traffic_source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub location: Location,
    pub orders: OrderSummary,
}

impl TryFrom<CustomerListRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerListRow) -> Result<Self, Self::Error> {
        Ok(Self {
            order_count: coerce::count("order_count", row.order_count)?,
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            age: row.age,
            gender: row.gender,
            city: row.city,
            state: row.state,
            country: row.country,
            traffic_source: row.traffic_source,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<CustomerDetailRow> for CustomerDetail {
    type Error = RepositoryError;

    fn try_from(row: CustomerDetailRow) -> Result<Self, Self::Error> {
        let orders = OrderSummary {
            total_orders: coerce::count("total_orders", row.total_orders)?,
            delivered_orders: coerce::count("delivered_orders", row.delivered_orders)?,
            returned_orders: coerce::count("returned_orders", row.returned_orders)?,
            total_items: coerce::count("total_items", row.total_items)?,
            first_order_date: row.first_order_date,
            last_order_date: row.last_order_date,
        };

        let location = Location {
            latitude: coerce::coordinate("latitude", row.latitude)?,
            longitude: coerce::coordinate("longitude", row.longitude)?,
            street_address: row.street_address,
            postal_code: row.postal_code,
            city: row.city,
            state: row.state,
            country: row.country,
        };

        Ok(Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            age: row.age,
            gender: row.gender,
            traffic_source: row.traffic_source,
            created_at: row.created_at,
            location,
            orders,
        })
    }
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            age: value.age,
            gender: value.gender,
            city: value.city,
            state: value.state,
            country: value.country,
            traffic_source: value.traffic_source,
            created_at: value.created_at,
            order_count: value.order_count,
        }
    }
}

impl From<CustomerDetail> for CustomerDetailResponse {
    fn from(value: CustomerDetail) -> Self {
        let CustomerDetail {
            location, orders, ..
        } = value;

        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            age: value.age,
            gender: value.gender,
            traffic_source: value.traffic_source,
            created_at: value.created_at,
            location: LocationResponse {
                street_address: location.street_address,
                postal_code: location.postal_code,
                city: location.city,
                state: location.state,
                country: location.country,
                latitude: location.latitude,
                longitude: location.longitude,
            },
            order_statistics: CustomerOrderStatistics {
                total_orders: orders.total_orders,
                delivered_orders: orders.delivered_orders,
                returned_orders: orders.returned_orders,
                total_items: orders.total_items,
                first_order_date: orders.first_order_date,
                last_order_date: orders.last_order_date,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_row() -> CustomerDetailRow {
        CustomerDetailRow {
            id: 7,
            first_name: Some("Grace".into()),
            last_name: Some("Hopper".into()),
            email: Some("grace@example.com".into()),
            age: Some(45),
            gender: Some("F".into()),
            traffic_source: Some("Search".into()),
            created_at: None,
            street_address: None,
            postal_code: None,
            city: Some("Arlington".into()),
            state: None,
            country: Some("United States".into()),
            latitude: Some(38.88),
            longitude: Some(-77.1),
            total_orders: None,
            delivered_orders: None,
            returned_orders: None,
            total_items: None,
            first_order_date: None,
            last_order_date: None,
        }
    }

    #[test]
    fn customer_without_orders_gets_zeroed_statistics() {
        let detail = CustomerDetail::try_from(detail_row()).unwrap();

        assert_eq!(detail.orders.total_orders, 0);
        assert_eq!(detail.orders.total_items, 0);
        assert_eq!(detail.location.latitude, Some(38.88));

        let response = CustomerDetailResponse::from(detail);
        assert_eq!(response.order_statistics.delivered_orders, 0);
        assert_eq!(response.location.city.as_deref(), Some("Arlington"));
    }

    #[test]
    fn negative_aggregate_is_rejected() {
        let mut row = detail_row();
        row.returned_orders = Some(-4);

        assert!(CustomerDetail::try_from(row).is_err());
    }
}
