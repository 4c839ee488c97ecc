use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::{ResolveError, ShortenerError, StorageError};
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidUrl(String),
    #[error("missing Host header")]
    MissingHost,
    #[error("{0} not found")]
    NotFound(String),
    #[error("service temporarily unavailable")]
    StoreUnavailable(#[source] StorageError),
    #[error("could not allocate a short code")]
    CapacityExhausted { attempts: u32 },
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        match error {
            ShortenerError::InvalidUrl(reason) => AppError::InvalidUrl(reason),
            ShortenerError::StoreUnavailable(source) => AppError::StoreUnavailable(source),
            ShortenerError::CapacityExhausted { attempts } => {
                AppError::CapacityExhausted { attempts }
            }
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::NotFound(code) => AppError::NotFound(code),
            ResolveError::StoreUnavailable(source) => AppError::StoreUnavailable(source),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) | AppError::MissingHost => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::CapacityExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::StoreUnavailable(source) => {
                error!(error = %source, "mapping store unavailable");
            }
            AppError::CapacityExhausted { attempts } => {
                error!(attempts, "short code space exhausted");
            }
            _ => {}
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_shortener_errors_to_statuses() {
        let cases = [
            (
                ShortenerError::InvalidUrl("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ShortenerError::StoreUnavailable(StorageError::Timeout("insert".to_string())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ShortenerError::CapacityExhausted { attempts: 8 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(AppError::from(error).status_code(), status);
        }
    }

    #[test]
    fn maps_resolve_errors_to_statuses() {
        let not_found = AppError::from(ResolveError::NotFound("abc1234".to_string()));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "abc1234 not found");

        let down = AppError::from(ResolveError::StoreUnavailable(StorageError::Unavailable(
            "pool closed".to_string(),
        )));
        assert_eq!(down.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn store_details_stay_out_of_the_response() {
        let error = AppError::StoreUnavailable(StorageError::Query("secret dsn".to_string()));
        assert!(!error.to_string().contains("secret"));
    }
}
