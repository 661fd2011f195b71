//! Checkout page (`checkout.html`) contract checks.
//!
//! The checkout flow itself (order summary, payment) is an unspecified
//! future contract and is deliberately not verified here; only the title,
//! navigation, and footer policy links are.

use scraper::ElementRef;
use xyz_storefront_core::contract::{
    PRIVACY_POLICY_LINK_TEXT, PRIVACY_POLICY_PATH, TERMS_LINK_TEXT, TERMS_PATH,
};
use xyz_storefront_core::{Page, StoreIdentity};

use super::shared;
use crate::dom::{self, Dom};
use crate::report::{CheckReport, Violation};

/// Verify the checkout document.
#[must_use]
pub fn check_checkout(identity: &StoreIdentity, markup: &str) -> CheckReport {
    let dom = Dom::parse(markup);
    let mut report = CheckReport::new(Page::Checkout);

    shared::expect_title(&dom, &identity.checkout_title(), &mut report);
    if let Some(header) = shared::expect_header(&dom, &mut report) {
        shared::expect_logo_link(header, identity, &mut report);
        shared::expect_header_cart_link(header, &mut report);
    }
    if let Some(footer) = shared::expect_footer(&dom, &mut report) {
        shared::expect_footer_copyright(footer, identity, &mut report);
        expect_policy_link(footer, PRIVACY_POLICY_PATH, PRIVACY_POLICY_LINK_TEXT, &mut report);
        expect_policy_link(footer, TERMS_PATH, TERMS_LINK_TEXT, &mut report);
    }

    report
}

/// The footer must link to a policy page with the literal visible text.
fn expect_policy_link(
    footer: ElementRef<'_>,
    href: &str,
    text: &str,
    report: &mut CheckReport,
) {
    match dom::link_by_href(footer, href) {
        None => report.push(Violation::MissingLink {
            scope: "footer".to_owned(),
            href: href.to_owned(),
        }),
        Some(anchor) => {
            let actual = dom::text_of(anchor);
            if actual != text {
                report.push(Violation::LinkTextMismatch {
                    href: href.to_owned(),
                    expected: text.to_owned(),
                    actual,
                });
            }
        }
    }
}
