//! Product entity.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Errors raised when a product violates the markup contract.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product ID is the empty string.
    #[error("product id cannot be empty")]
    EmptyId,
    /// The product name is empty or whitespace-only.
    #[error("product {id}: name cannot be empty")]
    EmptyName {
        /// ID of the offending product.
        id: ProductId,
    },
}

/// A product as rendered on the home page.
///
/// Every product rendered into the product list must expose a non-empty
/// `id`, a non-empty `name`, and a formatted `price`, plus an add-to-cart
/// affordance (the affordance is the template's responsibility).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque product identifier.
    pub id: ProductId,
    /// Human-readable product name.
    pub name: String,
    /// Unit price.
    pub price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Check the contract invariants: non-empty `id` and `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError`] if either field is empty.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::price::CurrencyCode;

    fn price() -> Price {
        Price::from_cents(1299, CurrencyCode::USD)
    }

    #[test]
    fn valid_product_passes() {
        let product = Product::new("SKU-1001", "Canvas Tote Bag", price());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn empty_id_is_rejected() {
        let product = Product::new("", "Canvas Tote Bag", price());
        assert_eq!(product.validate(), Err(ProductError::EmptyId));
    }

    #[test]
    fn blank_name_is_rejected() {
        let product = Product::new("SKU-1001", "   ", price());
        assert!(matches!(
            product.validate(),
            Err(ProductError::EmptyName { .. })
        ));
    }
}
