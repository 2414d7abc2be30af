use crate::{abstract_trait::DynStatsService, state::AppState};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::responses::{ApiResponse, StatisticsData},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/stats",
    tag = "Statistics",
    responses(
        (status = 200, description = "Aggregate snapshot over all customers and orders", body = ApiResponse<StatisticsData>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_statistics(
    Extension(service): Extension<DynStatsService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_statistics().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn stats_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/stats", get(get_statistics))
        .layer(Extension(app_state.di_container.stats_service.clone()))
}
