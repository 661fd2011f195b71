//! Structural verification of the storefront markup contract.
//!
//! Each document is parsed fresh into a DOM (html5ever via `scraper`) and
//! checked against the contract with CSS selector queries: element
//! presence, exact text and link targets, and cardinality. A check never
//! retries or recovers; it collects every [`Violation`] it finds and
//! reports them per page in a [`CheckReport`].
//!
//! Pages are verified independently; nothing is shared between checks, so
//! verifying the same markup twice yields the same report.
//!
//! # Example
//!
//! ```
//! use xyz_storefront_core::{Page, StoreIdentity};
//!
//! let identity = StoreIdentity::default();
//! let report = xyz_storefront_conformance::check(Page::Cart, &identity, "<html></html>");
//! assert!(!report.is_conformant());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod checks;
mod dom;
mod report;

pub use checks::{check, check_cart, check_checkout, check_home};
pub use report::{CheckReport, Violation};
