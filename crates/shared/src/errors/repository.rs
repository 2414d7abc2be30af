use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Invalid value in column {field}: {reason}")]
    Coercion { field: &'static str, reason: String },

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    pub fn coercion(field: &'static str, reason: impl Into<String>) -> Self {
        RepositoryError::Coercion {
            field,
            reason: reason.into(),
        }
    }
}
