use crate::repository::coerce;
use shared::{domain::responses::StatisticsResponse, errors::RepositoryError};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, FromRow)]
pub struct StatisticsRow {
    pub total_customers: Option<i64>,
    pub total_orders: Option<i64>,
    pub average_items_per_order: Option<f64>,
    pub total_items_sold: Option<i64>,
    pub delivered_orders: Option<i64>,
    pub returned_orders: Option<i64>,
    pub traffic_sources: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    pub total_customers: i64,
    pub total_orders: i64,
    pub average_items_per_order: f64,
    pub total_items_sold: i64,
    pub delivered_orders: i64,
    pub returned_orders: i64,
    pub traffic_sources: i64,
}

impl TryFrom<StatisticsRow> for Statistics {
    type Error = RepositoryError;

    fn try_from(row: StatisticsRow) -> Result<Self, Self::Error> {
        Ok(Self {
            total_customers: coerce::count("total_customers", row.total_customers)?,
            total_orders: coerce::count("total_orders", row.total_orders)?,
            average_items_per_order: coerce::average(
                "average_items_per_order",
                row.average_items_per_order,
            )?,
            total_items_sold: coerce::count("total_items_sold", row.total_items_sold)?,
            delivered_orders: coerce::count("delivered_orders", row.delivered_orders)?,
            returned_orders: coerce::count("returned_orders", row.returned_orders)?,
            traffic_sources: coerce::count("traffic_sources", row.traffic_sources)?,
        })
    }
}

impl Statistics {
    pub fn delivery_rate(&self) -> String {
        percentage(self.delivered_orders, self.total_orders)
    }

    pub fn return_rate(&self) -> String {
        percentage(self.returned_orders, self.total_orders)
    }
}

fn percentage(part: i64, total: i64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.2}%", part as f64 / total as f64 * 100.0)
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl From<Statistics> for StatisticsResponse {
    fn from(value: Statistics) -> Self {
        Self {
            delivery_rate: value.delivery_rate(),
            return_rate: value.return_rate(),
            total_customers: value.total_customers,
            total_orders: value.total_orders,
            average_items_per_order: round_two(value.average_items_per_order),
            total_items_sold: value.total_items_sold,
            delivered_orders: value.delivered_orders,
            returned_orders: value.returned_orders,
            traffic_sources: value.traffic_sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_store_reports_zero_rates() {
        let stats = Statistics::try_from(StatisticsRow::default()).unwrap();
        let response = StatisticsResponse::from(stats);

        assert_eq!(response.total_orders, 0);
        assert_eq!(response.average_items_per_order, 0.0);
        assert_eq!(response.delivery_rate, "0%");
        assert_eq!(response.return_rate, "0%");
    }

    #[rstest]
    #[case(1, 3, "33.33%")]
    #[case(2, 3, "66.67%")]
    #[case(3, 3, "100.00%")]
    #[case(0, 7, "0.00%")]
    fn rates_use_two_decimals(#[case] part: i64, #[case] total: i64, #[case] expected: &str) {
        assert_eq!(percentage(part, total), expected);
    }

    #[test]
    fn average_is_rounded_to_cents() {
        let stats = Statistics {
            total_orders: 3,
            average_items_per_order: 1.666_666,
            ..Default::default()
        };

        assert_eq!(StatisticsResponse::from(stats).average_items_per_order, 1.67);
    }

    #[test]
    fn non_finite_average_is_rejected() {
        let row = StatisticsRow {
            average_items_per_order: Some(f64::NAN),
            ..Default::default()
        };

        assert!(Statistics::try_from(row).is_err());
    }
}
