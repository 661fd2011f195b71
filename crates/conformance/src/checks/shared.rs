//! Checks shared by every document: title, header navigation, footer.

use scraper::ElementRef;
use xyz_storefront_core::{Page, StoreIdentity};

use crate::dom::{self, Dom};
use crate::report::{CheckReport, Violation};

/// The document must have a `<title>` with exactly the expected text.
pub(crate) fn expect_title(dom: &Dom, expected: &str, report: &mut CheckReport) {
    match dom.title() {
        None => report.push(Violation::MissingElement {
            selector: "head > title".to_owned(),
        }),
        Some(actual) if actual != expected => report.push(Violation::TextMismatch {
            selector: "head > title".to_owned(),
            expected: expected.to_owned(),
            actual,
        }),
        Some(_) => {}
    }
}

/// The document must have a `<header>`; returns it for the nav checks.
pub(crate) fn expect_header<'a>(dom: &'a Dom, report: &mut CheckReport) -> Option<ElementRef<'a>> {
    let header = dom.select_one("header");
    if header.is_none() {
        report.push(Violation::MissingElement {
            selector: "header".to_owned(),
        });
    }
    header
}

/// The document must have a `<footer>`; returns it for the content checks.
pub(crate) fn expect_footer<'a>(dom: &'a Dom, report: &mut CheckReport) -> Option<ElementRef<'a>> {
    let footer = dom.select_one("footer");
    if footer.is_none() {
        report.push(Violation::MissingElement {
            selector: "footer".to_owned(),
        });
    }
    footer
}

/// The header must carry the logo link: visible text equal to the company
/// name, targeting the site root.
pub(crate) fn expect_logo_link(
    header: ElementRef<'_>,
    identity: &StoreIdentity,
    report: &mut CheckReport,
) {
    match dom::link_by_text(header, &identity.name) {
        None => report.push(Violation::MissingLinkWithText {
            scope: "header".to_owned(),
            text: identity.name.clone(),
        }),
        Some(anchor) => {
            let actual = anchor.value().attr("href").unwrap_or_default();
            if actual != Page::Home.path() {
                report.push(Violation::LinkTargetMismatch {
                    text: identity.name.clone(),
                    expected: Page::Home.path().to_owned(),
                    actual: actual.to_owned(),
                });
            }
        }
    }
}

/// The header must link to the cart page (home and checkout).
pub(crate) fn expect_header_cart_link(header: ElementRef<'_>, report: &mut CheckReport) {
    if dom::link_by_href(header, Page::Cart.path()).is_none() {
        report.push(Violation::MissingLink {
            scope: "header".to_owned(),
            href: Page::Cart.path().to_owned(),
        });
    }
}

/// The cart page's own header must not link to the cart page.
pub(crate) fn forbid_header_cart_link(header: ElementRef<'_>, report: &mut CheckReport) {
    if dom::link_by_href(header, Page::Cart.path()).is_some() {
        report.push(Violation::ForbiddenElement {
            selector: format!("header a[href=\"{}\"]", Page::Cart.path()),
        });
    }
}

/// The footer must carry a paragraph whose text is the byte-exact
/// copyright notice.
///
/// Compared for equality, not containment: a mojibake notice (`Â©`)
/// contains the correct UTF-8 string as a suffix.
pub(crate) fn expect_footer_copyright(
    footer: ElementRef<'_>,
    identity: &StoreIdentity,
    report: &mut CheckReport,
) {
    let expected = identity.copyright_notice();
    let paragraphs: Vec<String> = footer
        .select(&dom::selector("p"))
        .map(dom::text_of)
        .collect();
    if paragraphs.iter().any(|text| *text == expected) {
        return;
    }
    report.push(Violation::TextMismatch {
        selector: "footer".to_owned(),
        expected,
        actual: paragraphs
            .into_iter()
            .next()
            .unwrap_or_else(|| dom::text_of(footer)),
    });
}
