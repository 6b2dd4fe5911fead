//! # API Error Type
//!
//! What HTTP clients see when a request fails.
//!
//! ```text
//! ValidationError ─┐
//! CoreError ───────┼──► ApiError { code, message } ──► (status, JSON body)
//! DbError ─────────┤
//! CheckoutError ───┘
//! ```
//!
//! | Code               | Status | Typical cause                              |
//! |--------------------|--------|--------------------------------------------|
//! | INVALID_INPUT      | 400    | empty checkout, bad date, quantity ≤ 0     |
//! | NOT_FOUND          | 404    | unknown product or transaction             |
//! | CONFLICT           | 409    | deleting a product that has sales          |
//! | INSUFFICIENT_STOCK | 422    | quantity above remaining stock             |
//! | INTERNAL           | 500    | any storage fault (detail only in logs)    |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use kasir_core::{CoreError, ValidationError};
use kasir_db::{CheckoutError, DbError};

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    NotFound,
    InsufficientStock,
    Conflict,
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InsufficientStock => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned by every handler.
///
/// Serialized as `{"code": "NOT_FOUND", "message": "Product not found: 7"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Logs the real cause and hides it from the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        error!(error = %cause, "Internal error");
        ApiError::new(ErrorCode::Internal, "internal server error")
    }
}

/// Result type for handlers and services.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Conversions
// =============================================================================

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::not_found(err.to_string()),
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            // Report the inner message without the "Validation error:" prefix
            CoreError::Validation(inner) => inner.into(),
            CoreError::EmptyCheckout | CoreError::AmountOverflow { .. } => {
                ApiError::invalid_input(err.to_string())
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::not_found(err.to_string()),
            DbError::ForeignKeyViolation { .. } => {
                ApiError::new(ErrorCode::Conflict, "resource is still referenced")
            }
            DbError::CheckViolation { message } => {
                error!(error = %message, "Constraint violation");
                ApiError::invalid_input("value violates a data constraint")
            }
            other => ApiError::internal(other),
        }
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Rejected(core) => core.into(),
            CheckoutError::Storage(db) => db.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(
            ApiError::from(CoreError::ProductNotFound(3)).code,
            ErrorCode::NotFound
        );
        assert_eq!(
            ApiError::from(CoreError::EmptyCheckout),
            ApiError::invalid_input("no items in checkout")
        );

        let stock = ApiError::from(CoreError::InsufficientStock {
            product_id: 1,
            name: "Tea".to_string(),
            available: 1,
            requested: 2,
        });
        assert_eq!(stock.code, ErrorCode::InsufficientStock);
        assert_eq!(stock.code.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(stock.message.contains("Tea"));
    }

    #[test]
    fn test_validation_message_is_unwrapped() {
        let err = ApiError::from(CoreError::Validation(ValidationError::MustBePositive {
            field: "items[0].quantity".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(!err.message.starts_with("Validation error"));
        assert!(err.message.contains("items[0].quantity"));
    }

    #[test]
    fn test_storage_faults_are_hidden() {
        let err = ApiError::from(CheckoutError::Storage(DbError::QueryFailed(
            "disk I/O error at page 12".to_string(),
        )));
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(err.message, "internal server error");
    }

    #[test]
    fn test_foreign_key_is_conflict() {
        let err = ApiError::from(DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        });
        assert_eq!(err.code.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_check_violation_message_is_fixed() {
        let err = ApiError::from(DbError::CheckViolation {
            message: "CHECK constraint failed: stock >= 0".to_string(),
        });
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "value violates a data constraint");
        assert!(!err.message.contains("CHECK constraint"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(ApiError::not_found("Transaction not found: 9")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Transaction not found: 9" })
        );
    }
}
