//! Store identity and the exact strings the markup contract derives from it.

use serde::{Deserialize, Serialize};

/// Default company name used across the mockup.
pub const DEFAULT_COMPANY_NAME: &str = "XYZ Corporation";

/// Default copyright year. The footer string is fixed to this year, not the
/// current one.
pub const DEFAULT_COPYRIGHT_YEAR: u16 = 2021;

/// The store's identity: the company name and copyright year every page
/// derives its title and footer text from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreIdentity {
    /// Company name, used verbatim as page title and logo link text.
    pub name: String,
    /// Year in the footer copyright notice.
    pub copyright_year: u16,
}

impl Default for StoreIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMPANY_NAME.to_owned(),
            copyright_year: DEFAULT_COPYRIGHT_YEAR,
        }
    }
}

impl StoreIdentity {
    /// Create an identity with the given company name and year.
    #[must_use]
    pub fn new(name: impl Into<String>, copyright_year: u16) -> Self {
        Self {
            name: name.into(),
            copyright_year,
        }
    }

    /// The footer copyright notice, byte-exact on every page.
    ///
    /// The `©` sign is proper UTF-8 (`0xC2 0xA9`); the verifier compares
    /// the full string byte for byte.
    #[must_use]
    pub fn copyright_notice(&self) -> String {
        format!(
            "\u{a9} {} {}, all rights reserved",
            self.copyright_year, self.name
        )
    }

    /// The checkout page title: `"<company>: Checkout"`.
    #[must_use]
    pub fn checkout_title(&self) -> String {
        format!("{}: Checkout", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_copyright_notice_is_byte_exact() {
        let notice = StoreIdentity::default().copyright_notice();
        assert_eq!(notice, "© 2021 XYZ Corporation, all rights reserved");
        // UTF-8 encoding of the copyright sign, not a mojibake variant.
        assert_eq!(&notice.as_bytes()[..2], &[0xC2, 0xA9]);
    }

    #[test]
    fn checkout_title_appends_suffix() {
        let identity = StoreIdentity::default();
        assert_eq!(identity.checkout_title(), "XYZ Corporation: Checkout");
    }

    #[test]
    fn custom_identity_flows_into_strings() {
        let identity = StoreIdentity::new("Acme Ltd", 2024);
        assert_eq!(
            identity.copyright_notice(),
            "© 2024 Acme Ltd, all rights reserved"
        );
        assert_eq!(identity.checkout_title(), "Acme Ltd: Checkout");
    }
}
