mod error;
mod http;
mod repository;
mod service;

pub use self::error::ErrorResponse;
pub use self::http::{GENERIC_INTERNAL_MESSAGE, HttpError};
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
