//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule rejections                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kasir-db errors (separate crate)                                      │
//! │  ├── DbError          - Storage failures                               │
//! │  └── CheckoutError    - CoreError | DbError from the recorder          │
//! │                                                                         │
//! │  kasir-api errors (app)                                                │
//! │  └── ApiError         - What HTTP clients see (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CheckoutError → ApiError          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule rejections.
///
/// Every variant is recoverable by the caller (fix the request, pick another
/// product, lower the quantity). Storage faults never appear here.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A checkout referenced a product id that does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Requested quantity exceeds the stock left for a product.
    ///
    /// ## User Workflow
    /// ```text
    /// Checkout [{product_id: 3, quantity: 5}]
    ///      │
    ///      ▼
    /// stock of product 3 = 2
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Coffee", available: 2, requested: 5 }
    ///      │
    ///      ▼
    /// whole checkout rolled back, nothing written
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout request carried no line items.
    #[error("no items in checkout")]
    EmptyCheckout,

    /// A line subtotal or the checkout total does not fit in an i64.
    #[error("Amount out of range for product {product_id}")]
    AmountOverflow { product_id: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g. a date that is not YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: 1,
            name: "Coffee".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Coffee: available 3, requested 5"
        );
        assert_eq!(CoreError::EmptyCheckout.to_string(), "no items in checkout");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "items[0].quantity".to_string(),
        };
        assert_eq!(err.to_string(), "items[0].quantity must be positive");

        let err = ValidationError::Required {
            field: "start_date".to_string(),
        };
        assert_eq!(err.to_string(), "start_date is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
