//! Core types for the XYZ storefront.
//!
//! This module provides type-safe wrappers for the domain concepts that
//! appear in the rendered markup.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartItem};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{Product, ProductError};
