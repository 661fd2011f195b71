//! Checkout page template.
//!
//! The checkout flow itself (order summary, payment) is not specified yet;
//! the page carries a placeholder section plus the required navigation and
//! footer policy links.

use askama::Template;
use xyz_storefront_core::StoreIdentity;

use super::LayoutView;

/// Checkout page template.
#[derive(Template)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub layout: LayoutView,
}

impl CheckoutTemplate {
    /// Build the checkout page view.
    #[must_use]
    pub fn new(identity: &StoreIdentity) -> Self {
        Self {
            layout: LayoutView::from(identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_policy_links() {
        let html = CheckoutTemplate::new(&StoreIdentity::default())
            .render()
            .expect("checkout renders");
        assert!(html.contains("<title>XYZ Corporation: Checkout</title>"));
        assert!(html.contains(r#"<a href="privacypolicy.html">Privacy Policy</a>"#));
        assert!(html.contains(r#"<a href="terms.html">Terms &amp; Conditions</a>"#));
    }
}
