//! Static product catalog.
//!
//! The mockup has no product backend; the listing is authored here and
//! rendered as-is. Swap this for a real data source once one exists.

use xyz_storefront_core::{CurrencyCode, Price, Product};

fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

/// The products shown on the home page, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::new("SKU-1001", "Walnut Desk Organizer", usd(3450)),
        Product::new("SKU-1002", "Canvas Tote Bag", usd(1899)),
        Product::new("SKU-1003", "Stainless Steel Water Bottle", usd(2400)),
        Product::new("SKU-1004", "Ceramic Pour-Over Set", usd(5625)),
        Product::new("SKU-1005", "Linen Notebook, A5", usd(1250)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_nonempty_and_valid() {
        let catalog = products();
        assert!(!catalog.is_empty());
        for product in &catalog {
            product.validate().expect("catalog product is valid");
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = products();
        let mut ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
