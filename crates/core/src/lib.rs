//! XYZ Storefront Core - Shared types library.
//!
//! This crate provides the common vocabulary used across the storefront
//! components:
//! - `storefront` - Renders the static mockup pages
//! - `conformance` - Verifies rendered markup against the contract
//!
//! # Architecture
//!
//! The core crate contains only types and constants - no I/O, no HTML
//! parsing, no templating. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart entries, prices, and type-safe IDs
//! - [`identity`] - Store identity and the exact strings derived from it
//! - [`contract`] - Pages, link texts, and `data-*` marker attributes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod contract;
pub mod identity;
pub mod types;

pub use contract::Page;
pub use identity::StoreIdentity;
pub use types::*;
