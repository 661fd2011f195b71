//! The shared markup contract.
//!
//! The three documents and the verifier agree on page paths, literal link
//! texts, and the `data-*` marker attributes that identify an element's
//! role independent of styling. Keeping them here as typed constants means
//! the renderer and the verifier cannot drift apart silently.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The three documents of the mockup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// Home / product listing (`index.html`).
    Home,
    /// Shopping cart (`cart.html`).
    Cart,
    /// Checkout placeholder (`checkout.html`).
    Checkout,
}

impl Page {
    /// All pages, in rendering order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Cart, Self::Checkout];

    /// The document's file name, which doubles as its link target.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Cart => "cart.html",
            Self::Checkout => "checkout.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Privacy policy page path, linked from the checkout footer.
pub const PRIVACY_POLICY_PATH: &str = "privacypolicy.html";

/// Terms and conditions page path, linked from the checkout footer.
pub const TERMS_PATH: &str = "terms.html";

/// Visible text of the cart page's checkout link.
pub const CHECKOUT_LINK_TEXT: &str = "Checkout";

/// Visible text of the checkout footer's privacy policy link.
pub const PRIVACY_POLICY_LINK_TEXT: &str = "Privacy Policy";

/// Visible text of the checkout footer's terms link.
pub const TERMS_LINK_TEXT: &str = "Terms & Conditions";

/// `data-*` marker attributes.
///
/// Markers identify an element's role for both the (external) client-side
/// script and the verifier; they carry no value, only presence.
pub mod markers {
    /// Container for the home page product listing.
    pub const PRODUCT_LIST: &str = "data-product-list";
    /// One product entry inside the product list.
    pub const PRODUCT_ITEM: &str = "data-product-item";
    /// Entity identifier field (products and cart items).
    pub const ID: &str = "data-id";
    /// Entity name field (products and cart items).
    pub const NAME: &str = "data-name";
    /// Formatted price field (products and cart items).
    pub const PRICE: &str = "data-price";
    /// Add-to-cart affordance on a product entry.
    pub const BTN_ADD_TO_CART: &str = "data-btn-add-to-cart";

    /// Container for the whole cart block.
    pub const CART: &str = "data-cart";
    /// The (initially empty) list of live cart items.
    pub const CART_ITEMS: &str = "data-cart-items";
    /// One live cart item inside the items list.
    pub const CART_ITEM: &str = "data-cart-item";
    /// Running subtotal display, `$0.00` when empty.
    pub const CART_SUBTOTAL: &str = "data-cart-subtotal";
    /// Item count display, `0` when empty.
    pub const CART_ITEMS_COUNT: &str = "data-cart-items-count";
    /// The single, non-rendered cart item template.
    pub const CART_ITEM_TEMPLATE: &str = "data-cart-item-template";
    /// Quantity increment affordance inside the item template.
    pub const BTN_QTY_INCREMENT: &str = "data-btn-qty-increment";
    /// Quantity decrement affordance inside the item template.
    pub const BTN_QTY_DECREMENT: &str = "data-btn-qty-decrement";
    /// Remove-item affordance inside the item template.
    pub const BTN_REMOVE_ITEM: &str = "data-btn-remove-item";

    /// Markers that must appear in the cart item template's inner markup.
    ///
    /// The template's contents are schema, not live DOM, so the verifier
    /// checks for these in the raw inner markup.
    pub const CART_ITEM_TEMPLATE_MARKERS: [&str; 7] = [
        CART_ITEM,
        ID,
        NAME,
        PRICE,
        BTN_QTY_INCREMENT,
        BTN_QTY_DECREMENT,
        BTN_REMOVE_ITEM,
    ];
}
