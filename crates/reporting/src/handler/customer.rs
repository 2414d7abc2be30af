use crate::{abstract_trait::DynCustomerService, handler::MaxPageSize, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::{
        requests::{PageParams, PageRequest, parse_positive_id},
        responses::{ApiResponse, CustomerDetailData, CustomerListData, CustomerOrdersData},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customer",
    params(PageParams),
    responses(
        (status = 200, description = "Page of customers with their order counts", body = ApiResponse<CustomerListData>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerService>,
    Extension(MaxPageSize(max_page_size)): Extension<MaxPageSize>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, HttpError> {
    let page = PageRequest::from_params(&params, max_page_size);
    let response = service.find_all(&page).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID (positive integer)")),
    responses(
        (status = 200, description = "Customer with location and order statistics", body = ApiResponse<CustomerDetailData>),
        (status = 400, description = "Malformed customer ID", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_positive_id(&id, "Customer ID")?;
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/customers/{id}/orders",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID (positive integer)")),
    responses(
        (status = 200, description = "Every order of the customer, newest first", body = ApiResponse<CustomerOrdersData>),
        (status = 400, description = "Malformed customer ID", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customer_orders(
    Extension(service): Extension<DynCustomerService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_positive_id(&id, "Customer ID")?;
    let response = service.find_orders(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/customers", get(get_customers))
        .route("/customers/{id}", get(get_customer))
        .route("/customers/{id}/orders", get(get_customer_orders))
        .layer(Extension(app_state.di_container.customer_service.clone()))
        .layer(Extension(MaxPageSize(app_state.max_page_size)))
}
