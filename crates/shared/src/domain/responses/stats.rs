use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatisticsResponse {
    pub total_customers: i64,
    pub total_orders: i64,
    pub average_items_per_order: f64,
    pub total_items_sold: i64,
    pub delivered_orders: i64,
    pub returned_orders: i64,
    pub traffic_sources: i64,
    /// Two fractional digits with a `%` suffix, `"0%"` without orders.
    #[schema(example = "42.10%")]
    pub delivery_rate: String,
    #[schema(example = "9.75%")]
    pub return_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatisticsData {
    pub statistics: StatisticsResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0.0, "0%", "0%")]
    #[case(3, 2.5, "33.33%", "0.00%")]
    fn statistics_survive_json(
        #[case] total_orders: i64,
        #[case] average: f64,
        #[case] delivery_rate: &str,
        #[case] return_rate: &str,
    ) {
        let data = StatisticsData {
            statistics: StatisticsResponse {
                total_customers: 3,
                total_orders,
                average_items_per_order: average,
                total_items_sold: (average * total_orders as f64) as i64,
                delivered_orders: total_orders / 3,
                returned_orders: 0,
                traffic_sources: 2,
                delivery_rate: delivery_rate.into(),
                return_rate: return_rate.into(),
            },
        };

        let value = serde_json::to_value(&data).unwrap();

        assert!(value["statistics"]["total_orders"].is_i64());
        assert!(value["statistics"]["average_items_per_order"].is_f64());
        assert_eq!(value["statistics"]["delivery_rate"], delivery_rate);

        let back: StatisticsData = serde_json::from_value(value).unwrap();
        assert_eq!(back, data);
    }
}
