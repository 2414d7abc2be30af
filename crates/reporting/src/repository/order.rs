use crate::{
    abstract_trait::OrderRepositoryTrait,
    domain::OrderFilter,
    model::{Order, OrderDetail, OrderDetailRow, OrderRow},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, domain::requests::PageRequest, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

/// Columns selected for order list rows; expects `orders o LEFT JOIN users u`.
pub const ORDER_COLUMNS: &str = "o.order_id, o.user_id, o.status, o.gender, o.num_of_item, \
     o.created_at, o.shipped_at, o.delivered_at, o.returned_at, \
     u.first_name AS customer_first_name, u.last_name AS customer_last_name, \
     u.email AS customer_email";

#[derive(Clone)]
pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

pub(crate) fn page_query(
    filter: &OrderFilter,
    page: &PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {ORDER_COLUMNS} FROM orders o LEFT JOIN users u ON u.id = o.user_id"
    ));
    filter.push_where(&mut builder);
    builder
        .push(" ORDER BY o.created_at DESC NULLS LAST, o.order_id DESC LIMIT ")
        .push_bind(page.limit)
        .push(" OFFSET ")
        .push_bind(page.offset());
    builder
}

pub(crate) fn count_query(filter: &OrderFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM orders o");
    filter.push_where(&mut builder);
    builder
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn find_all(
        &self,
        filter: &OrderFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        info!(
            "🔍 Fetching orders | Filter: {filter:?}, Page: {}, Limit: {}",
            page.page, page.limit
        );

        let mut rows_builder = page_query(filter, page);
        let mut count_builder = count_query(filter);

        let (rows, total) = tokio::try_join!(
            rows_builder.build_query_as::<OrderRow>().fetch_all(&self.db),
            count_builder.build_query_scalar::<i64>().fetch_one(&self.db),
        )
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            RepositoryError::from(e)
        })?;

        let orders = rows
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, total))
    }

    async fn find_by_id(&self, order_id: i64) -> Result<Option<OrderDetail>, RepositoryError> {
        info!("🆔 Fetching order by ID: {order_id}");

        let row = sqlx::query_as::<_, OrderDetailRow>(
            r#"
            SELECT
                o.order_id, o.user_id, o.status, o.gender, o.num_of_item,
                o.created_at, o.shipped_at, o.delivered_at, o.returned_at,
                u.id AS customer_id,
                u.first_name AS customer_first_name,
                u.last_name AS customer_last_name,
                u.email AS customer_email,
                u.city AS customer_city,
                u.state AS customer_state,
                u.country AS customer_country
            FROM orders o
            LEFT JOIN users u ON u.id = o.user_id
            WHERE o.order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        row.map(OrderDetail::try_from).transpose()
    }
}
