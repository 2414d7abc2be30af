use crate::{abstract_trait::DynOrderService, handler::MaxPageSize, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::{
        requests::{
            FindAllOrders, FindOrdersByStatus, OrderListParams, PageParams, parse_positive_id,
        },
        responses::{ApiResponse, OrderDetailData, OrderListData, OrdersByStatusData},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Order",
    params(OrderListParams),
    responses(
        (status = 200, description = "Page of orders, newest first", body = ApiResponse<OrderListData>),
        (status = 400, description = "Malformed user_id filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderService>,
    Extension(MaxPageSize(max_page_size)): Extension<MaxPageSize>,
    Query(params): Query<OrderListParams>,
) -> Result<impl IntoResponse, HttpError> {
    let req = FindAllOrders::from_params(&params, max_page_size)?;
    let response = service.find_all(&req).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    tag = "Order",
    params(("order_id" = String, Path, description = "Order ID (positive integer)")),
    responses(
        (status = 200, description = "Order with customer, timeline and processing metrics", body = ApiResponse<OrderDetailData>),
        (status = 400, description = "Malformed order ID", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let order_id = parse_positive_id(&order_id, "Order ID")?;
    let response = service.find_by_id(order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/status/{status}",
    tag = "Order",
    params(
        ("status" = String, Path, description = "pending, shipped, delivered, returned or cancelled (case-insensitive)"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of orders in the given status", body = ApiResponse<OrdersByStatusData>),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_orders_by_status(
    Extension(service): Extension<DynOrderService>,
    Extension(MaxPageSize(max_page_size)): Extension<MaxPageSize>,
    Path(status): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, HttpError> {
    let req = FindOrdersByStatus::from_parts(&status, &params, max_page_size)?;
    let response = service.find_by_status(&req).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/orders", get(get_orders))
        .route("/orders/{order_id}", get(get_order))
        .route("/orders/status/{status}", get(get_orders_by_status))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(MaxPageSize(app_state.max_page_size)))
}
