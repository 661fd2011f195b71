//! Structural assertions for the rendered cart page (`cart.html`).

use scraper::ElementRef;
use xyz_storefront_core::Page;
use xyz_storefront_integration_tests::{parse_default, sel};

fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[test]
fn has_the_company_name_as_title() {
    let dom = parse_default(Page::Cart);
    let title = dom.select(&sel("head > title")).next().expect("title exists");
    assert_eq!(text(title), "XYZ Corporation");
}

#[test]
fn header_does_not_link_to_the_cart_itself() {
    let dom = parse_default(Page::Cart);
    let header = dom.select(&sel("header")).next().expect("header exists");
    let self_link = header
        .select(&sel("a"))
        .find(|a| a.value().attr("href") == Some("cart.html"));
    assert!(self_link.is_none());
}

#[test]
fn header_still_carries_the_logo_link() {
    let dom = parse_default(Page::Cart);
    let header = dom.select(&sel("header")).next().expect("header exists");
    let logo = header
        .select(&sel("a"))
        .find(|a| text(*a) == "XYZ Corporation")
        .expect("logo link exists");
    assert_eq!(logo.value().attr("href"), Some("index.html"));
}

#[test]
fn items_list_is_empty_by_default() {
    let dom = parse_default(Page::Cart);
    let items = dom
        .select(&sel("[data-cart] [data-cart-items]"))
        .next()
        .expect("items list exists");
    assert_eq!(items.select(&sel("[data-cart-item]")).count(), 0);
}

#[test]
fn zero_state_subtotal_and_count_hold_simultaneously() {
    let dom = parse_default(Page::Cart);
    let cart = dom.select(&sel("[data-cart]")).next().expect("cart exists");
    let subtotal = cart
        .select(&sel("[data-cart-subtotal]"))
        .next()
        .expect("subtotal exists");
    let count = cart
        .select(&sel("[data-cart-items-count]"))
        .next()
        .expect("count exists");
    assert_eq!(text(subtotal), "$0.00");
    assert_eq!(text(count), "0");
}

#[test]
fn cart_links_to_checkout_with_literal_text() {
    let dom = parse_default(Page::Cart);
    let cart = dom.select(&sel("[data-cart]")).next().expect("cart exists");
    let checkout = cart
        .select(&sel("a"))
        .find(|a| a.value().attr("href") == Some("checkout.html"))
        .expect("checkout link exists");
    assert_eq!(text(checkout), "Checkout");
}

#[test]
fn exactly_one_item_template_exists_and_is_a_template_element() {
    let dom = parse_default(Page::Cart);
    let templates: Vec<_> = dom.select(&sel("[data-cart-item-template]")).collect();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].value().name(), "template");
}

#[test]
fn item_template_declares_all_required_markers() {
    let dom = parse_default(Page::Cart);
    let template = dom
        .select(&sel("[data-cart-item-template]"))
        .next()
        .expect("item template exists");
    let inner = template.inner_html();
    for marker in [
        "data-cart-item",
        "data-id",
        "data-name",
        "data-price",
        "data-btn-qty-increment",
        "data-btn-qty-decrement",
        "data-btn-remove-item",
    ] {
        assert!(inner.contains(marker), "template lacks {marker}");
    }
}
