//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; the defaults reproduce the canonical mockup.
//!
//! - `STORE_COMPANY_NAME` - Company name (default: `XYZ Corporation`)
//! - `STORE_COPYRIGHT_YEAR` - Footer copyright year (default: `2021`)
//! - `STORE_OUT_DIR` - Output directory for `xyz-store build` (default: `dist`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use xyz_storefront_core::StoreIdentity;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Company name used for titles, logo link, and copyright.
    pub company_name: String,
    /// Year in the footer copyright notice.
    pub copyright_year: u16,
    /// Directory the `build` command writes documents into.
    pub out_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let identity = StoreIdentity::default();
        Self {
            company_name: identity.name,
            copyright_year: identity.copyright_year,
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `STORE_COPYRIGHT_YEAR` is set but not a
    /// valid year.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(name) = env::var("STORE_COMPANY_NAME") {
            config.company_name = name;
        }
        if let Ok(year) = env::var("STORE_COPYRIGHT_YEAR") {
            config.copyright_year = year.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("STORE_COPYRIGHT_YEAR".to_owned(), year)
            })?;
        }
        if let Ok(dir) = env::var("STORE_OUT_DIR") {
            config.out_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// The store identity this configuration describes.
    #[must_use]
    pub fn identity(&self) -> StoreIdentity {
        StoreIdentity::new(self.company_name.clone(), self.copyright_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_default_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.identity(), StoreIdentity::default());
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }
}
