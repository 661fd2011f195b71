//! Home page template: the product listing.

use askama::Template;
use xyz_storefront_core::{Product, StoreIdentity};

use super::LayoutView;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
        }
    }
}

/// Home page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub products: Vec<ProductView>,
}

impl HomeTemplate {
    /// Build the home page view from the catalog.
    #[must_use]
    pub fn new(identity: &StoreIdentity, catalog: &[Product]) -> Self {
        Self {
            layout: LayoutView::from(identity),
            products: catalog.iter().map(ProductView::from).collect(),
        }
    }
}
