use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::validate::FieldError;

/// Request-boundary error taxonomy. Every variant maps to one status code
/// and a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    /// A well-formed foreign key that points at nothing.
    #[error("Invalid {0}!")]
    InvalidReference(&'static str),
    #[error("Not found")]
    NotFound,
    #[error("Rental not found!")]
    RentalNotFound,
    #[error("Access denied. No token provided.")]
    MissingToken,
    #[error("Invalid token.")]
    InvalidToken,
    #[error("Access denied.")]
    Forbidden,
    #[error("Movie not in stock!")]
    OutOfStock,
    #[error("Return already processed!")]
    AlreadyProcessed,
    #[error("Something failed.")]
    Database(#[from] sqlx::Error),
    #[error("Something failed.")]
    Internal(anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_)
            | ApiError::InvalidReference(_)
            | ApiError::InvalidToken
            | ApiError::OutOfStock
            | ApiError::AlreadyProcessed => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RentalNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Database(e) => {
                error!(error = %e, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        let cases = [
            (ApiError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::InvalidReference("genre"), StatusCode::BAD_REQUEST),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (ApiError::RentalNotFound, StatusCode::NOT_FOUND),
            (ApiError::MissingToken, StatusCode::UNAUTHORIZED),
            (ApiError::InvalidToken, StatusCode::BAD_REQUEST),
            (ApiError::Forbidden, StatusCode::FORBIDDEN),
            (ApiError::OutOfStock, StatusCode::BAD_REQUEST),
            (ApiError::AlreadyProcessed, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn reference_message_names_the_entity() {
        assert_eq!(ApiError::InvalidReference("customer").to_string(), "Invalid customer!");
    }
}
