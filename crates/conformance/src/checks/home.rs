//! Home page (`index.html`) contract checks.

use scraper::ElementRef;
use xyz_storefront_core::contract::markers;
use xyz_storefront_core::{Page, StoreIdentity};

use super::shared;
use crate::dom::{self, Dom};
use crate::report::{CheckReport, Violation};

/// Verify the home document: title, navigation, footer, and the product
/// listing with all required fields per product.
#[must_use]
pub fn check_home(identity: &StoreIdentity, markup: &str) -> CheckReport {
    let dom = Dom::parse(markup);
    let mut report = CheckReport::new(Page::Home);

    shared::expect_title(&dom, &identity.name, &mut report);
    if let Some(header) = shared::expect_header(&dom, &mut report) {
        shared::expect_logo_link(header, identity, &mut report);
        shared::expect_header_cart_link(header, &mut report);
    }
    if let Some(footer) = shared::expect_footer(&dom, &mut report) {
        shared::expect_footer_copyright(footer, identity, &mut report);
    }

    let list_raw = dom::marker_selector(markers::PRODUCT_LIST);
    let Some(list) = dom.select_one(&list_raw) else {
        report.push(Violation::MissingElement { selector: list_raw });
        return report;
    };

    let item_raw = dom::marker_selector(markers::PRODUCT_ITEM);
    let items: Vec<_> = list.select(&dom::selector(&item_raw)).collect();
    if items.is_empty() {
        report.push(Violation::WrongCount {
            selector: item_raw.clone(),
            expected: "at least 1 product".to_owned(),
            actual: 0,
        });
    }

    for (index, item) in items.iter().enumerate() {
        for field in [markers::ID, markers::NAME, markers::PRICE] {
            expect_unique_nonempty_field(*item, index, field, &mut report);
        }

        let button_raw = dom::marker_selector(markers::BTN_ADD_TO_CART);
        let buttons = item.select(&dom::selector(&button_raw)).count();
        if buttons != 1 {
            report.push(Violation::WrongCount {
                selector: item_selector(index, &button_raw),
                expected: "exactly 1 add-to-cart affordance".to_owned(),
                actual: buttons,
            });
        }
    }

    report
}

/// Diagnostic selector label for a field of the nth product item.
fn item_selector(index: usize, field_raw: &str) -> String {
    format!(
        "{}#{index} {field_raw}",
        dom::marker_selector(markers::PRODUCT_ITEM)
    )
}

/// Each product must have exactly one of the field and it must carry text.
fn expect_unique_nonempty_field(
    item: ElementRef<'_>,
    index: usize,
    marker: &str,
    report: &mut CheckReport,
) {
    let field_raw = dom::marker_selector(marker);
    let fields: Vec<_> = item.select(&dom::selector(&field_raw)).collect();
    match fields.as_slice() {
        [] => report.push(Violation::MissingElement {
            selector: item_selector(index, &field_raw),
        }),
        [field] => {
            if dom::text_of(*field).is_empty() {
                report.push(Violation::EmptyText {
                    selector: item_selector(index, &field_raw),
                });
            }
        }
        many => report.push(Violation::WrongCount {
            selector: item_selector(index, &field_raw),
            expected: "exactly 1".to_owned(),
            actual: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(products: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head><title>XYZ Corporation</title></head>
<body>
<header><a href="index.html">XYZ Corporation</a><a href="cart.html">Cart</a></header>
<main><section data-product-list>{products}</section></main>
<footer><p>© 2021 XYZ Corporation, all rights reserved</p></footer>
</body>
</html>"#
        )
    }

    const GOOD_ITEM: &str = concat!(
        r#"<article data-product-item><span data-id>SKU-1</span>"#,
        r#"<h2 data-name>Tote</h2><p data-price>$9.99</p>"#,
        r#"<button data-btn-add-to-cart>Add to Cart</button></article>"#
    );

    fn identity() -> StoreIdentity {
        StoreIdentity::default()
    }

    #[test]
    fn conformant_home_passes() {
        let report = check_home(&identity(), &page(GOOD_ITEM));
        assert!(report.is_conformant(), "{report}");
    }

    #[test]
    fn empty_product_list_is_a_violation() {
        let report = check_home(&identity(), &page(""));
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::WrongCount { actual: 0, .. }
        )));
    }

    #[test]
    fn product_without_add_to_cart_is_flagged() {
        let item = r#"<article data-product-item><span data-id>1</span>
            <span data-name>Tote</span><span data-price>$9.99</span></article>"#;
        let report = check_home(&identity(), &page(item));
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::WrongCount { expected, actual: 0, .. }
                if expected.contains("add-to-cart")
        )));
    }

    #[test]
    fn empty_price_text_is_flagged() {
        let item = r#"<article data-product-item><span data-id>1</span>
            <span data-name>Tote</span><span data-price></span>
            <button data-btn-add-to-cart>Add to Cart</button></article>"#;
        let report = check_home(&identity(), &page(item));
        assert!(report
            .violations()
            .iter()
            .any(|v| matches!(v, Violation::EmptyText { selector } if selector.contains("data-price"))));
    }

    #[test]
    fn wrong_title_is_flagged() {
        let markup = page(GOOD_ITEM).replace(
            "<title>XYZ Corporation</title>",
            "<title>Some Other Shop</title>",
        );
        let report = check_home(&identity(), &markup);
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::TextMismatch { selector, .. } if selector == "head > title"
        )));
    }

    #[test]
    fn missing_header_cart_link_is_flagged() {
        let markup = page(GOOD_ITEM).replace(r#"<a href="cart.html">Cart</a>"#, "");
        let report = check_home(&identity(), &markup);
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::MissingLink { href, .. } if href == "cart.html"
        )));
    }

    #[test]
    fn mojibake_copyright_is_flagged() {
        let markup = page(GOOD_ITEM).replace('\u{a9}', "\u{c2}\u{a9}");
        let report = check_home(&identity(), &markup);
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::TextMismatch { selector, .. } if selector == "footer"
        )));
    }

    #[test]
    fn copyright_buried_in_a_longer_paragraph_is_flagged() {
        // The notice must be a paragraph of its own, not a substring.
        let markup = page(GOOD_ITEM).replace(
            "<p>© 2021 XYZ Corporation, all rights reserved</p>",
            "<p>Contact us. © 2021 XYZ Corporation, all rights reserved. Thanks!</p>",
        );
        let report = check_home(&identity(), &markup);
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::TextMismatch { selector, .. } if selector == "footer"
        )));
    }

    #[test]
    fn copyright_alongside_other_footer_paragraphs_passes() {
        let markup = page(GOOD_ITEM).replace(
            "</footer>",
            "<p>Free shipping on orders over $50.</p></footer>",
        );
        let report = check_home(&identity(), &markup);
        assert!(report.is_conformant(), "{report}");
    }
}
