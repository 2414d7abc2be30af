//! Total conversions for numeric values read from the store.
//!
//! `NULL` aggregates mean "nothing to aggregate" and become zero. Values the
//! schema cannot legitimately produce are rejected instead of clamped.

use shared::errors::RepositoryError;

pub fn count(field: &'static str, raw: Option<i64>) -> Result<i64, RepositoryError> {
    match raw {
        None => Ok(0),
        Some(v) if v < 0 => Err(RepositoryError::coercion(field, format!("negative count {v}"))),
        Some(v) => Ok(v),
    }
}

pub fn small_count(field: &'static str, raw: Option<i32>) -> Result<i64, RepositoryError> {
    count(field, raw.map(i64::from))
}

pub fn average(field: &'static str, raw: Option<f64>) -> Result<f64, RepositoryError> {
    match raw {
        None => Ok(0.0),
        Some(v) if !v.is_finite() => {
            Err(RepositoryError::coercion(field, format!("non-finite value {v}")))
        }
        Some(v) if v < 0.0 => Err(RepositoryError::coercion(field, format!("negative value {v}"))),
        Some(v) => Ok(v),
    }
}

/// Coordinates stay optional; only non-finite values are rejected.
pub fn coordinate(field: &'static str, raw: Option<f64>) -> Result<Option<f64>, RepositoryError> {
    match raw {
        Some(v) if !v.is_finite() => {
            Err(RepositoryError::coercion(field, format!("non-finite value {v}")))
        }
        other => Ok(other),
    }
}
