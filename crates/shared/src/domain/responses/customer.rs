use crate::domain::responses::{OrderResponse, Pagination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer row as shown in the paginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
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

impl CustomerResponse {
    /// `"first last"`, skipping whichever half is missing.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerOrderStatistics {
    pub total_orders: i64,
    pub delivered_orders: i64,
    pub returned_orders: i64,
    pub total_items: i64,
    pub first_order_date: Option<DateTime<Utc>>,
    pub last_order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDetailResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub traffic_source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub location: LocationResponse,
    pub order_statistics: CustomerOrderStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerListData {
    pub customers: Vec<CustomerResponse>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDetailData {
    pub customer: CustomerDetailResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerOrdersData {
    pub customer_id: i64,
    pub orders: Vec<OrderResponse>,
    pub total_orders: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first: Option<&str>, last: Option<&str>) -> CustomerResponse {
        CustomerResponse {
            id: 1,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            email: None,
            age: None,
            gender: None,
            city: None,
            state: None,
            country: None,
            traffic_source: None,
            created_at: None,
            order_count: 0,
        }
    }

    #[test]
    fn full_name_joins_present_parts() {
        assert_eq!(customer(Some("Ada"), Some("Lovelace")).full_name(), "Ada Lovelace");
        assert_eq!(customer(Some("Ada"), None).full_name(), "Ada");
        assert_eq!(customer(None, None).full_name(), "");
    }

    #[test]
    fn list_envelope_keeps_integers_as_numbers() {
        let data = CustomerListData {
            customers: vec![customer(Some("Ada"), Some("Lovelace"))],
            pagination: Pagination {
                current_page: 1,
                total_pages: 1,
                total_items: 1,
                per_page: 10,
                has_next_page: false,
                has_prev_page: false,
            },
        };

        let value = serde_json::to_value(&data).unwrap();

        assert!(value["customers"][0]["id"].is_i64());
        assert!(value["customers"][0]["order_count"].is_i64());
        assert!(value["pagination"]["total_pages"].is_i64());
        assert!(value["pagination"]["has_next_page"].is_boolean());

        let back: CustomerListData = serde_json::from_value(value).unwrap();
        assert_eq!(back, data);
    }
}
