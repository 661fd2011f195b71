//! Site renderer: turns the identity, catalog, and cart into the three
//! static documents.
//!
//! Every render starts from the same immutable inputs, so rendering the
//! same page twice yields byte-identical markup; nothing mutable is shared
//! between renders.

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use thiserror::Error;
use xyz_storefront_core::{Cart, Page, Product, ProductError, StoreIdentity};

use crate::catalog;
use crate::config::SiteConfig;
use crate::pages::{CartTemplate, CheckoutTemplate, HomeTemplate};

/// Errors raised while rendering or writing the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Template rendering failed.
    #[error("failed to render {page}: {source}")]
    Render {
        page: Page,
        #[source]
        source: askama::Error,
    },

    /// A catalog product violates the markup contract.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] ProductError),

    /// Writing a document to disk failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The whole mockup site: identity, catalog, and (default empty) cart.
#[derive(Debug, Clone)]
pub struct Site {
    identity: StoreIdentity,
    catalog: Vec<Product>,
    cart: Cart,
}

impl Site {
    /// A site with the built-in catalog and an empty cart.
    #[must_use]
    pub fn new(identity: StoreIdentity) -> Self {
        Self {
            identity,
            catalog: catalog::products(),
            cart: Cart::empty(),
        }
    }

    /// A site from loaded configuration.
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.identity())
    }

    /// Replace the catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<Product>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the cart contents rendered on the cart page.
    #[must_use]
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    /// The store identity the documents are rendered for.
    #[must_use]
    pub const fn identity(&self) -> &StoreIdentity {
        &self.identity
    }

    /// Render a single document.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if a catalog product is invalid or the
    /// template fails to render.
    pub fn render(&self, page: Page) -> Result<String, SiteError> {
        let markup = match page {
            Page::Home => {
                for product in &self.catalog {
                    product.validate()?;
                }
                HomeTemplate::new(&self.identity, &self.catalog).render()
            }
            Page::Cart => CartTemplate::new(&self.identity, &self.cart).render(),
            Page::Checkout => CheckoutTemplate::new(&self.identity).render(),
        }
        .map_err(|source| SiteError::Render { page, source })?;

        tracing::debug!(page = %page, bytes = markup.len(), "rendered document");
        Ok(markup)
    }

    /// Render all three documents in page order.
    ///
    /// # Errors
    ///
    /// Returns the first [`SiteError`] encountered.
    pub fn render_all(&self) -> Result<Vec<(Page, String)>, SiteError> {
        Page::ALL
            .into_iter()
            .map(|page| Ok((page, self.render(page)?)))
            .collect()
    }

    /// Render and write all documents into `out_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] on render failure or I/O failure.
    pub fn write_to(&self, out_dir: &Path) -> Result<(), SiteError> {
        fs::create_dir_all(out_dir).map_err(|source| SiteError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;

        for (page, markup) in self.render_all()? {
            let path = out_dir.join(page.path());
            fs::write(&path, &markup).map_err(|source| SiteError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), bytes = markup.len(), "wrote document");
        }

        Ok(())
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(StoreIdentity::default())
    }
}
