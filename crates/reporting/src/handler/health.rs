use crate::{abstract_trait::DynHealthService, state::AppState};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::responses::HealthResponse,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server and database are reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = ErrorResponse)
    )
)]
pub async fn health_check(
    Extension(service): Extension<DynHealthService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.check().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn health_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/health", get(health_check))
        .layer(Extension(app_state.di_container.health_service.clone()))
}
