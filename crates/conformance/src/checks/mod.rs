//! Per-page contract checks.

mod cart;
mod checkout;
mod home;
mod shared;

use xyz_storefront_core::{Page, StoreIdentity};

pub use cart::check_cart;
pub use checkout::check_checkout;
pub use home::check_home;

use crate::report::CheckReport;

/// Verify one document against its page contract.
#[must_use]
pub fn check(page: Page, identity: &StoreIdentity, markup: &str) -> CheckReport {
    match page {
        Page::Home => check_home(identity, markup),
        Page::Cart => check_cart(identity, markup),
        Page::Checkout => check_checkout(identity, markup),
    }
}
