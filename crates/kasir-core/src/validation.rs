//! # Validation Module
//!
//! Input validation for checkout requests, catalog writes and report dates.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum Json / Query)                           │
//! │  └── Type validation (deserialization)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service (kasir-api)                                          │
//! │  └── THIS MODULE: shape and range rules                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK (stock >= 0), CHECK (quantity > 0)                          │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checked Checkout Items
//! The transaction recorder only accepts [`CheckoutItems`], which can only be
//! built through [`CheckoutItems::new`]. A non-empty list with positive
//! quantities is therefore guaranteed by the type, not by convention.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{CheckoutItem, NewProduct};
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Calendar date format accepted for report ranges.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Checkout
// =============================================================================

/// A non-empty list of checkout lines, each with a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutItems(Vec<CheckoutItem>);

impl CheckoutItems {
    /// Validates raw checkout lines.
    ///
    /// ## Rules
    /// - At least one item → otherwise [`CoreError::EmptyCheckout`]
    /// - Every `quantity > 0` → otherwise `MustBePositive` naming the line
    ///
    /// ```rust
    /// use kasir_core::{CheckoutItem, CheckoutItems};
    ///
    /// assert!(CheckoutItems::new(vec![]).is_err());
    /// let items = CheckoutItems::new(vec![CheckoutItem { product_id: 1, quantity: 2 }]).unwrap();
    /// assert_eq!(items.len(), 1);
    /// ```
    pub fn new(items: Vec<CheckoutItem>) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::EmptyCheckout);
        }

        for (index, item) in items.iter().enumerate() {
            validate_quantity(index, item.quantity)?;
        }

        Ok(CheckoutItems(items))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckoutItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a value built by [`CheckoutItems::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a CheckoutItems {
    type Item = &'a CheckoutItem;
    type IntoIter = std::slice::Iter<'a, CheckoutItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validates the quantity of checkout line `index`.
pub fn validate_quantity(index: usize, quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: format!("items[{}].quantity", index),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product payload and returns it with the name trimmed.
pub fn validate_new_product(product: NewProduct) -> ValidationResult<NewProduct> {
    validate_product_name(&product.name)?;

    if product.price < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if product.stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }

    Ok(NewProduct {
        name: product.name.trim().to_string(),
        ..product
    })
}

// =============================================================================
// Report Dates
// =============================================================================

/// Parses a mandatory `YYYY-MM-DD` query parameter.
///
/// Missing and blank values are both `Required`.
///
/// ```rust
/// use kasir_core::validation::parse_report_date;
///
/// assert!(parse_report_date("start_date", Some("2024-01-05")).is_ok());
/// assert!(parse_report_date("start_date", Some("05/01/2024")).is_err());
/// assert!(parse_report_date("start_date", None).is_err());
/// ```
pub fn parse_report_date(field: &str, value: Option<&str>) -> ValidationResult<NaiveDate> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, REPORT_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })
}
