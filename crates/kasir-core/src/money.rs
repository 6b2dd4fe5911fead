//! # Money Module
//!
//! Integer money in the smallest currency unit (rupiah has no fractional
//! unit in practice, so one minor unit is one rupiah).
//!
//! ## Why Checked Arithmetic?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = quantity × unit price                                       │
//! │  total    = Σ subtotal                                                  │
//! │                                                                         │
//! │  Both come straight from client input (quantity) and catalog data       │
//! │  (price). A silent wrap-around would persist a negative total, so       │
//! │  every step uses checked_* and surfaces None to the caller.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// A monetary amount in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let price = Money::from_minor(15_000);
    /// assert_eq!(price.minor(), 15_000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Line total for `quantity` units at this unit price.
    ///
    /// Returns `None` on overflow.
    ///
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(5).checked_times(3), Some(Money::from_minor(15)));
    /// assert_eq!(Money::from_minor(i64::MAX).checked_times(2), None);
    /// ```
    #[inline]
    pub fn checked_times(&self, quantity: i64) -> Option<Self> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}
