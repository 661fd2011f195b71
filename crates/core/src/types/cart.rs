//! Cart and cart item entities.
//!
//! The cart page renders from these types. How items get into a cart
//! (add-to-cart, quantity buttons) is client-side behavior outside this
//! workspace; the types only guarantee the shape and the zero-state
//! invariant: an empty cart's subtotal displays `"$0.00"` and its item
//! count is `0`.

use serde::{Deserialize, Serialize};

use super::id::CartLineId;
use super::price::{CurrencyCode, Price};
use super::product::Product;

/// A single cart entry: a product at a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Opaque line identifier, distinct from the product ID.
    pub id: CartLineId,
    /// The product this line refers to.
    pub product: Product,
    /// Quantity, at least 1 for a live line.
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line.
    #[must_use]
    pub fn new(id: impl Into<CartLineId>, product: Product, quantity: u32) -> Self {
        Self {
            id: id.into(),
            product,
            quantity,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An ordered sequence of cart items with derived subtotal and count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from items, preserving order.
    #[must_use]
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line totals. `$0.00` for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Price::zero(CurrencyCode::default()), |acc, line| {
                acc.plus(&line)
            })
    }
}
