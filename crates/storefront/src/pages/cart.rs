//! Cart page template.
//!
//! The page renders with zero items by default; the item template element
//! in the markup is the schema any client-side script would clone when the
//! cart gains entries.

use askama::Template;
use xyz_storefront_core::{Cart, CartItem, StoreIdentity};

use super::LayoutView;

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub line_price: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.product.name.clone(),
            price: item.product.price.display(),
            quantity: item.quantity,
            line_price: item.line_total().display(),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view: no items, `$0.00`, count 0.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().display(),
            item_count: cart.item_count(),
        }
    }
}

/// Cart page template.
#[derive(Template)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub layout: LayoutView,
    pub cart: CartView,
}

impl CartTemplate {
    /// Build the cart page view.
    #[must_use]
    pub fn new(identity: &StoreIdentity, cart: &Cart) -> Self {
        Self {
            layout: LayoutView::from(identity),
            cart: CartView::from(cart),
        }
    }
}
