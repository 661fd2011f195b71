//! Integration tests for the XYZ storefront.
//!
//! Each test renders a document with the storefront crate and asserts its
//! structure, either through the conformance crate or with direct DOM
//! queries. Documents are rendered fresh per assertion group; nothing is
//! shared between loads.
//!
//! # Test files
//!
//! - `tests/home_page.rs` - product listing structure
//! - `tests/cart_page.rs` - zero-state cart and the item template
//! - `tests/checkout_page.rs` - back-navigation and policy links
//! - `tests/site.rs` - whole-site conformance, determinism, disk round-trip

use scraper::{Html, Selector};
use xyz_storefront::Site;
use xyz_storefront_core::Page;

/// Render a page of the default site (default identity, built-in catalog,
/// empty cart).
#[must_use]
pub fn render_default(page: Page) -> String {
    Site::default().render(page).expect("default site renders")
}

/// Render a page and parse it into a DOM.
#[must_use]
pub fn parse_default(page: Page) -> Html {
    Html::parse_document(&render_default(page))
}

/// Parse a selector literal inside a test.
#[must_use]
pub fn sel(raw: &str) -> Selector {
    Selector::parse(raw).expect("test selector is valid")
}
