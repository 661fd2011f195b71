//! Page templates and their view structs.
//!
//! Each page owns a plain view struct per entity it displays; conversions
//! from core types happen in `From` impls so templates only ever see
//! preformatted strings.

pub mod cart;
pub mod checkout;
pub mod home;

use xyz_storefront_core::StoreIdentity;

pub use cart::{CartItemView, CartTemplate, CartView};
pub use checkout::CheckoutTemplate;
pub use home::{HomeTemplate, ProductView};

/// Shared layout data: everything `base.html` needs.
#[derive(Debug, Clone)]
pub struct LayoutView {
    /// Company name, used as title and logo link text.
    pub company: String,
    /// The exact footer copyright notice.
    pub copyright: String,
}

impl From<&StoreIdentity> for LayoutView {
    fn from(identity: &StoreIdentity) -> Self {
        Self {
            company: identity.name.clone(),
            copyright: identity.copyright_notice(),
        }
    }
}
