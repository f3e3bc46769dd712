use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, ValueObject};

/// Order line: product, quantity, unit price.
///
/// Validated once at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    product: String,
    quantity: i64,
    price: f64,
}

impl OrderItem {
    /// Build a line, rejecting non-positive quantities and negative prices.
    pub fn new(product: impl Into<String>, quantity: i64, price: f64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument("quantity must be positive"));
        }

        if price.is_nan() || price < 0.0 {
            return Err(DomainError::invalid_argument("price must not be negative"));
        }

        Ok(Self {
            product: product.into(),
            quantity,
            price,
        })
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Line total: quantity × unit price.
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

impl ValueObject for OrderItem {}
