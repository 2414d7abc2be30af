#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use reporting::{
    abstract_trait::{
        CustomerRepositoryTrait, HealthRepositoryTrait, OrderRepositoryTrait, StatsRepositoryTrait,
    },
    domain::OrderFilter,
    handler::AppRouter,
    model::{
        Customer, CustomerDetail, Location, Order, OrderCustomer, OrderDetail, OrderSummary,
        Statistics, Timeline,
    },
    repository::Repositories,
    state::AppState,
};
use serde_json::Value;
use shared::{domain::requests::PageRequest, errors::RepositoryError};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

pub fn day(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single()
}

pub fn customer(id: i64) -> Customer {
    Customer {
        id,
        first_name: Some(format!("First{id}")),
        last_name: Some(format!("Last{id}")),
        email: Some(format!("customer{id}@example.com")),
        age: Some(30),
        gender: Some("F".into()),
        city: Some("Seattle".into()),
        state: Some("Washington".into()),
        country: Some("United States".into()),
        traffic_source: Some(String::from(if id % 2 == 0 { "Search" } else { "Email" })),
        created_at: day(2023, 1, 1),
        order_count: 0,
    }
}

pub fn order(order_id: i64, user_id: i64, status: &str, items: i64, timeline: Timeline) -> Order {
    Order {
        order_id,
        user_id: Some(user_id),
        status: status.into(),
        gender: Some("F".into()),
        num_of_item: items,
        timeline,
        customer_name: None,
        customer_email: None,
    }
}

pub fn created(y: i32, m: u32, d: u32) -> Timeline {
    Timeline {
        created_at: day(y, m, d),
        ..Default::default()
    }
}

/// In-memory stand-in for every repository, counting the queries it serves.
#[derive(Default)]
pub struct FakeStore {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    unhealthy: bool,
    panic_on_stats: bool,
    queries: AtomicUsize,
}

impl FakeStore {
    pub fn new(customers: Vec<Customer>, orders: Vec<Order>) -> Self {
        Self {
            customers,
            orders,
            ..Default::default()
        }
    }

    /// Every query fails as if the connection was refused.
    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Default::default()
        }
    }

    pub fn panicking_stats() -> Self {
        Self {
            panic_on_stats: true,
            ..Default::default()
        }
    }

    /// 25 customers; customer 1 owns a fully shipped order and a shipped one,
    /// customer 2 a returned one, and one order points at a missing customer.
    pub fn seeded() -> Self {
        let customers = (1..=25).map(customer).collect();
        let orders = vec![
            order(
                100,
                1,
                "delivered",
                2,
                Timeline {
                    created_at: day(2024, 1, 1),
                    shipped_at: day(2024, 1, 3),
                    delivered_at: day(2024, 1, 5),
                    returned_at: None,
                },
            ),
            order(101, 1, "Shipped", 1, created(2024, 2, 1)),
            order(102, 2, "returned", 3, created(2024, 1, 15)),
            order(103, 999, "pending", 4, created(2024, 3, 1)),
        ];

        Self::new(customers, orders)
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
    }

    fn owner(&self, user_id: Option<i64>) -> Option<&Customer> {
        user_id.and_then(|id| self.customers.iter().find(|c| c.id == id))
    }

    fn with_owner(&self, order: &Order) -> Order {
        let mut order = order.clone();
        if let Some(owner) = self.owner(order.user_id) {
            order.customer_name = Some(format!(
                "{} {}",
                owner.first_name.clone().unwrap_or_default(),
                owner.last_name.clone().unwrap_or_default()
            ));
            order.customer_email = owner.email.clone();
        }
        order
    }

    fn newest_first(orders: &mut [Order]) {
        orders.sort_by(|a, b| b.timeline.created_at.cmp(&a.timeline.created_at));
    }

    fn page<T: Clone>(items: &[T], page: &PageRequest) -> Vec<T> {
        items
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CustomerRepositoryTrait for FakeStore {
    async fn find_all(&self, page: &PageRequest) -> Result<(Vec<Customer>, i64), RepositoryError> {
        self.hit();

        let mut customers: Vec<Customer> = self
            .customers
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.order_count = self
                    .orders
                    .iter()
                    .filter(|o| o.user_id == Some(c.id))
                    .count() as i64;
                c
            })
            .collect();
        customers.sort_by_key(|c| c.id);

        Ok((Self::page(&customers, page), customers.len() as i64))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CustomerDetail>, RepositoryError> {
        self.hit();

        let Some(c) = self.customers.iter().find(|c| c.id == id) else {
            return Ok(None);
        };

        let owned: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| o.user_id == Some(id))
            .collect();
        let with_status =
            |s: &str| owned.iter().filter(|o| o.status.eq_ignore_ascii_case(s)).count() as i64;

        Ok(Some(CustomerDetail {
            id: c.id,
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone(),
            age: c.age,
            gender: c.gender.clone(),
            traffic_source: c.traffic_source.clone(),
            created_at: c.created_at,
            location: Location {
                street_address: None,
                postal_code: None,
                city: c.city.clone(),
                state: c.state.clone(),
                country: c.country.clone(),
                latitude: Some(47.6),
                longitude: Some(-122.3),
            },
            orders: OrderSummary {
                total_orders: owned.len() as i64,
                delivered_orders: with_status("delivered"),
                returned_orders: with_status("returned"),
                total_items: owned.iter().map(|o| o.num_of_item).sum(),
                first_order_date: owned.iter().filter_map(|o| o.timeline.created_at).min(),
                last_order_date: owned.iter().filter_map(|o| o.timeline.created_at).max(),
            },
        }))
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        self.hit();
        Ok(self.customers.iter().any(|c| c.id == id))
    }

    async fn find_orders(&self, id: i64) -> Result<Vec<Order>, RepositoryError> {
        self.hit();

        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.user_id == Some(id))
            .map(|o| self.with_owner(o))
            .collect();
        Self::newest_first(&mut orders);

        Ok(orders)
    }
}

#[async_trait]
impl OrderRepositoryTrait for FakeStore {
    async fn find_all(
        &self,
        filter: &OrderFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        self.hit();

        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| {
                filter
                    .status
                    .as_ref()
                    .is_none_or(|s| o.status.to_lowercase() == s.as_str())
            })
            .filter(|o| filter.user_id.is_none_or(|id| o.user_id == Some(id)))
            .map(|o| self.with_owner(o))
            .collect();
        Self::newest_first(&mut orders);

        Ok((Self::page(&orders, page), orders.len() as i64))
    }

    async fn find_by_id(&self, order_id: i64) -> Result<Option<OrderDetail>, RepositoryError> {
        self.hit();

        Ok(self
            .orders
            .iter()
            .find(|o| o.order_id == order_id)
            .map(|o| OrderDetail {
                order_id: o.order_id,
                user_id: o.user_id,
                status: o.status.clone(),
                gender: o.gender.clone(),
                num_of_item: o.num_of_item,
                timeline: o.timeline,
                customer: self.owner(o.user_id).map(|c| OrderCustomer {
                    id: c.id,
                    first_name: c.first_name.clone(),
                    last_name: c.last_name.clone(),
                    email: c.email.clone(),
                    city: c.city.clone(),
                    state: c.state.clone(),
                    country: c.country.clone(),
                }),
            }))
    }
}

#[async_trait]
impl StatsRepositoryTrait for FakeStore {
    async fn snapshot(&self) -> Result<Statistics, RepositoryError> {
        self.hit();

        if self.panic_on_stats {
            panic!("statistics exploded");
        }

        let total_orders = self.orders.len() as i64;
        let total_items_sold: i64 = self.orders.iter().map(|o| o.num_of_item).sum();
        let with_status = |s: &str| {
            self.orders
                .iter()
                .filter(|o| o.status.eq_ignore_ascii_case(s))
                .count() as i64
        };
        let mut sources: Vec<&str> = self
            .customers
            .iter()
            .filter_map(|c| c.traffic_source.as_deref())
            .collect();
        sources.sort_unstable();
        sources.dedup();

        Ok(Statistics {
            total_customers: self.customers.len() as i64,
            total_orders,
            average_items_per_order: if total_orders == 0 {
                0.0
            } else {
                total_items_sold as f64 / total_orders as f64
            },
            total_items_sold,
            delivered_orders: with_status("delivered"),
            returned_orders: with_status("returned"),
            traffic_sources: sources.len() as i64,
        })
    }
}

#[async_trait]
impl HealthRepositoryTrait for FakeStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.hit();

        if self.unhealthy {
            return Err(RepositoryError::Custom("connection refused".into()));
        }
        Ok(())
    }
}

pub fn app(store: Arc<FakeStore>) -> Router {
    let repositories = Repositories {
        customer: store.clone(),
        order: store.clone(),
        stats: store.clone(),
        health: store,
    };

    AppRouter::build(AppState::from_repositories(repositories, 100))
}

pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(app, Method::GET, uri).await;
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("{uri} returned non-JSON body {body:?}: {e}"));

    (status, json)
}
