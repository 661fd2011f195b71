//! Cart page (`cart.html`) contract checks.

use scraper::ElementRef;
use xyz_storefront_core::contract::{self, markers};
use xyz_storefront_core::{Page, StoreIdentity};

use super::shared;
use crate::dom::{self, Dom};
use crate::report::{CheckReport, Violation};

/// Default subtotal display for an empty cart.
const EMPTY_SUBTOTAL: &str = "$0.00";

/// Default item count display for an empty cart.
const EMPTY_COUNT: &str = "0";

/// Verify the cart document: title, navigation (no self-link), footer,
/// zero-state cart block, checkout link, and the single item template.
#[must_use]
pub fn check_cart(identity: &StoreIdentity, markup: &str) -> CheckReport {
    let dom = Dom::parse(markup);
    let mut report = CheckReport::new(Page::Cart);

    shared::expect_title(&dom, &identity.name, &mut report);
    if let Some(header) = shared::expect_header(&dom, &mut report) {
        shared::expect_logo_link(header, identity, &mut report);
        shared::forbid_header_cart_link(header, &mut report);
    }
    if let Some(footer) = shared::expect_footer(&dom, &mut report) {
        shared::expect_footer_copyright(footer, identity, &mut report);
    }

    let cart_raw = dom::marker_selector(markers::CART);
    let Some(cart) = dom.select_one(&cart_raw) else {
        report.push(Violation::MissingElement { selector: cart_raw });
        return report;
    };

    check_items_list(cart, &mut report);
    expect_exact_text(cart, markers::CART_SUBTOTAL, EMPTY_SUBTOTAL, &mut report);
    expect_exact_text(cart, markers::CART_ITEMS_COUNT, EMPTY_COUNT, &mut report);
    check_checkout_link(cart, &mut report);
    check_item_template(&dom, &mut report);

    report
}

/// The items list exists and holds zero live items by default.
///
/// Live items are counted under the items list only; the item template's
/// contents carry the same markers but live elsewhere in the cart block.
fn check_items_list(cart: ElementRef<'_>, report: &mut CheckReport) {
    let items_raw = dom::marker_selector(markers::CART_ITEMS);
    let Some(items) = cart.select(&dom::selector(&items_raw)).next() else {
        report.push(Violation::MissingElement { selector: items_raw });
        return;
    };

    let item_raw = dom::marker_selector(markers::CART_ITEM);
    let live = items.select(&dom::selector(&item_raw)).count();
    if live != 0 {
        report.push(Violation::WrongCount {
            selector: format!("{items_raw} {item_raw}"),
            expected: "exactly 0 by default".to_owned(),
            actual: live,
        });
    }
}

/// A display element inside the cart block must carry exactly the text.
fn expect_exact_text(
    cart: ElementRef<'_>,
    marker: &str,
    expected: &str,
    report: &mut CheckReport,
) {
    let raw = dom::marker_selector(marker);
    match cart.select(&dom::selector(&raw)).next() {
        None => report.push(Violation::MissingElement { selector: raw }),
        Some(element) => {
            let actual = dom::text_of(element);
            if actual != expected {
                report.push(Violation::TextMismatch {
                    selector: raw,
                    expected: expected.to_owned(),
                    actual,
                });
            }
        }
    }
}

/// The cart block links to the checkout page with the literal text.
fn check_checkout_link(cart: ElementRef<'_>, report: &mut CheckReport) {
    let scope = dom::marker_selector(markers::CART);
    match dom::link_by_href(cart, Page::Checkout.path()) {
        None => report.push(Violation::MissingLink {
            scope,
            href: Page::Checkout.path().to_owned(),
        }),
        Some(anchor) => {
            let actual = dom::text_of(anchor);
            if actual != contract::CHECKOUT_LINK_TEXT {
                report.push(Violation::LinkTextMismatch {
                    href: Page::Checkout.path().to_owned(),
                    expected: contract::CHECKOUT_LINK_TEXT.to_owned(),
                    actual,
                });
            }
        }
    }
}

/// Exactly one `<template>` carries the item schema; its inner markup must
/// contain every required marker. The contents are schema, not live DOM,
/// so they are checked as raw markup.
fn check_item_template(dom: &Dom, report: &mut CheckReport) {
    let template_raw = dom::marker_selector(markers::CART_ITEM_TEMPLATE);
    let templates = dom.select_all(&template_raw);

    let template = match templates.as_slice() {
        [] => {
            report.push(Violation::MissingElement {
                selector: template_raw,
            });
            return;
        }
        [template] => *template,
        many => {
            report.push(Violation::WrongCount {
                selector: template_raw,
                expected: "exactly 1".to_owned(),
                actual: many.len(),
            });
            return;
        }
    };

    if template.value().name() != "template" {
        report.push(Violation::WrongElementKind {
            selector: template_raw,
            expected: "template".to_owned(),
            actual: template.value().name().to_owned(),
        });
    }

    let inner = template.inner_html();
    for marker in markers::CART_ITEM_TEMPLATE_MARKERS {
        if !inner.contains(marker) {
            report.push(Violation::MissingTemplateMarker {
                marker: marker.to_owned(),
            });
        }
    }
}
