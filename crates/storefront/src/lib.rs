//! XYZ Storefront - Static e-commerce mockup renderer.
//!
//! Renders the three documents of the mockup from askama templates:
//!
//! - `index.html` - product listing with add-to-cart affordances
//! - `cart.html` - empty-by-default cart with the cart item template
//! - `checkout.html` - checkout placeholder with policy links
//!
//! The documents share a markup contract (`data-*` marker attributes and
//! exact strings) defined in `xyz-storefront-core` and enforced by
//! `xyz-storefront-conformance`. Cart mutation and checkout processing are
//! external collaborators; this crate only guarantees the markers they
//! would attach to.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod pages;
pub mod site;

pub use config::{ConfigError, SiteConfig};
pub use site::{Site, SiteError};
