use crate::domain::requests::{PageParams, PageRequest, parse_positive_id};
use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Returned,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Returned,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Returned => "returned",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Case-insensitive parse that reports the accepted values on failure.
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        raw.parse().map_err(|_| {
            let allowed: Vec<&str> = Self::ALL.iter().map(OrderStatus::as_str).collect();
            ServiceError::InvalidInput(format!(
                "Invalid status '{raw}'. Must be one of: {}",
                allowed.join(", ")
            ))
        })
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == lowered)
            .ok_or(())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status condition of the order list. Values outside `OrderStatus` are
/// kept lowercased and match no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    Known(OrderStatus),
    Other(String),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map(StatusFilter::Known)
            .unwrap_or_else(|_| StatusFilter::Other(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::Known(status) => status.as_str(),
            StatusFilter::Other(raw) => raw,
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Known(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10, clamped to the configured maximum)
    pub limit: Option<String>,
    /// Only orders with this status (case-insensitive; unknown values match nothing)
    pub status: Option<String>,
    /// Only orders owned by this customer
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindAllOrders {
    pub page: PageRequest,
    pub status: Option<StatusFilter>,
    pub user_id: Option<i64>,
}

impl FindAllOrders {
    /// Empty filter values count as absent. Only `user_id` can be rejected.
    pub fn from_params(params: &OrderListParams, max_limit: i64) -> Result<Self, ServiceError> {
        let page = PageRequest::from_params(
            &PageParams {
                page: params.page.clone(),
                limit: params.limit.clone(),
            },
            max_limit,
        );

        let status = non_empty(params.status.as_deref()).map(StatusFilter::parse);

        let user_id = match non_empty(params.user_id.as_deref()) {
            Some(raw) => Some(parse_positive_id(raw, "User ID")?),
            None => None,
        };

        Ok(Self {
            page,
            status,
            user_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOrdersByStatus {
    pub status: OrderStatus,
    pub page: PageRequest,
}

impl FindOrdersByStatus {
    pub fn from_parts(
        raw_status: &str,
        params: &PageParams,
        max_limit: i64,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            status: OrderStatus::parse(raw_status)?,
            page: PageRequest::from_params(params, max_limit),
        })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty())
}
