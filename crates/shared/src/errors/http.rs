use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    RouteNotFound(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) | HttpError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            HttpError::BadRequest(_) => "invalid_input",
            HttpError::NotFound(_) => "not_found",
            HttpError::RouteNotFound(_) => "route_not_found",
            HttpError::Internal(_) => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::RouteNotFound(msg)
            | HttpError::Internal(msg) => msg,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => HttpError::BadRequest(msg),
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::Repo(repo_err) => {
                // The cause stays in the logs; the client only sees the generic text.
                match &repo_err {
                    RepositoryError::Sqlx(e) => error!("❌ Database failure: {e:?}"),
                    RepositoryError::Coercion { field, reason } => {
                        error!("❌ Store returned an unusable value for {field}: {reason}")
                    }
                    RepositoryError::Custom(msg) => error!("❌ Repository failure: {msg}"),
                }
                HttpError::Internal(GENERIC_INTERNAL_MESSAGE.into())
            }
            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.code(), self.message()));

        (status, body).into_response()
    }
}
