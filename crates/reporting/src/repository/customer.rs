use crate::{
    abstract_trait::CustomerRepositoryTrait,
    model::{Customer, CustomerDetail, CustomerDetailRow, CustomerListRow, Order, OrderRow},
    repository::order::ORDER_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, domain::requests::PageRequest, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CustomerRepository {
    db: ConnectionPool,
}

impl CustomerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn find_all(&self, page: &PageRequest) -> Result<(Vec<Customer>, i64), RepositoryError> {
        info!(
            "🔍 Fetching customers | Page: {}, Limit: {}",
            page.page, page.limit
        );

        let rows_query = sqlx::query_as::<_, CustomerListRow>(
            r#"
            SELECT
                u.id, u.first_name, u.last_name, u.email, u.age, u.gender,
                u.city, u.state, u.country, u.traffic_source, u.created_at,
                COUNT(o.order_id) AS order_count
            FROM users u
            LEFT JOIN orders o ON o.user_id = u.id
            GROUP BY u.id
            ORDER BY u.id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.db);

        let count_query =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users").fetch_one(&self.db);

        let (rows, total) = tokio::try_join!(rows_query, count_query).map_err(|e| {
            error!("❌ Failed to fetch customers: {e:?}");
            RepositoryError::from(e)
        })?;

        let customers = rows
            .into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((customers, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CustomerDetail>, RepositoryError> {
        info!("🆔 Fetching customer by ID: {id}");

        let row = sqlx::query_as::<_, CustomerDetailRow>(
            r#"
            SELECT
                u.id, u.first_name, u.last_name, u.email, u.age, u.gender,
                u.traffic_source, u.created_at,
                u.street_address, u.postal_code, u.city, u.state, u.country,
                u.latitude, u.longitude,
                COUNT(o.order_id) AS total_orders,
                COUNT(o.order_id) FILTER (WHERE LOWER(o.status) = 'delivered') AS delivered_orders,
                COUNT(o.order_id) FILTER (WHERE LOWER(o.status) = 'returned') AS returned_orders,
                SUM(o.num_of_item)::BIGINT AS total_items,
                MIN(o.created_at) AS first_order_date,
                MAX(o.created_at) AS last_order_date
            FROM users u
            LEFT JOIN orders o ON o.user_id = u.id
            WHERE u.id = $1
            GROUP BY u.id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customer {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        row.map(CustomerDetail::try_from).transpose()
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to check customer {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_orders(&self, id: i64) -> Result<Vec<Order>, RepositoryError> {
        info!("📦 Fetching orders for customer {id}");

        let sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders o LEFT JOIN users u ON u.id = o.user_id \
             WHERE o.user_id = $1 ORDER BY o.created_at DESC NULLS LAST, o.order_id DESC"
        );

        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(id)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders for customer {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        rows.into_iter().map(Order::try_from).collect()
    }
}
