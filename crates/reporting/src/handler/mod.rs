mod customer;
mod health;
mod order;
mod stats;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    domain::requests::OrderStatus,
    errors::{ErrorResponse, GENERIC_INTERNAL_MESSAGE, HttpError},
    utils::shutdown_signal,
};
use std::{any::Any, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::customer::customer_routes;
pub use self::health::health_routes;
pub use self::order::order_routes;
pub use self::stats::stats_routes;

/// Upper bound for `limit`, injected next to the services.
#[derive(Debug, Clone, Copy)]
pub struct MaxPageSize(pub i64);

#[derive(OpenApi)]
#[openapi(
    paths(
        customer::get_customers,
        customer::get_customer,
        customer::get_customer_orders,

        order::get_orders,
        order::get_order,
        order::get_orders_by_status,

        stats::get_statistics,
        health::health_check,
    ),
    components(schemas(ErrorResponse, OrderStatus)),
    tags(
        (name = "Customer", description = "Customer endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Statistics", description = "Aggregate statistics"),
        (name = "Health", description = "Liveness and database connectivity"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        error!("❌ Failed to encode metrics: {e}");
        return HttpError::Internal(GENERIC_INTERNAL_MESSAGE.into()).into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub async fn route_not_found(method: Method, uri: Uri) -> HttpError {
    HttpError::RouteNotFound(format!("Route {method} {} not found", uri.path()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    error!("💥 Handler panicked: {detail}");

    HttpError::Internal(GENERIC_INTERNAL_MESSAGE.into()).into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(customer_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(stats_routes(shared_state.clone()))
            .merge(health_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .fallback(route_not_found)
            .method_not_allowed_fallback(route_not_found)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}
