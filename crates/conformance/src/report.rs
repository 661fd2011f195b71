//! Violations and per-page check reports.

use core::fmt;

use xyz_storefront_core::Page;

/// A single failed structural expectation.
///
/// There is no runtime error taxonomy beyond this: a document either
/// conforms or it does not, per assertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A required element is absent.
    #[error("missing element `{selector}`")]
    MissingElement { selector: String },

    /// An element that must not exist is present.
    #[error("element `{selector}` must not be present")]
    ForbiddenElement { selector: String },

    /// An element's text differs from the required value.
    #[error("`{selector}`: expected text {expected:?}, found {actual:?}")]
    TextMismatch {
        selector: String,
        expected: String,
        actual: String,
    },

    /// An element that must carry text is empty.
    #[error("`{selector}`: text must not be empty")]
    EmptyText { selector: String },

    /// The number of matching elements is wrong.
    #[error("`{selector}`: expected {expected}, found {actual}")]
    WrongCount {
        selector: String,
        expected: String,
        actual: usize,
    },

    /// No anchor under `scope` targets `href`.
    #[error("{scope}: missing link to `{href}`")]
    MissingLink { scope: String, href: String },

    /// No anchor under `scope` carries the visible text.
    #[error("{scope}: missing link with text {text:?}")]
    MissingLinkWithText { scope: String, text: String },

    /// A link exists but its visible text is wrong.
    #[error("link to `{href}`: expected text {expected:?}, found {actual:?}")]
    LinkTextMismatch {
        href: String,
        expected: String,
        actual: String,
    },

    /// A link exists but targets the wrong document.
    #[error("link {text:?}: expected target `{expected}`, found `{actual}`")]
    LinkTargetMismatch {
        text: String,
        expected: String,
        actual: String,
    },

    /// An element exists but is the wrong kind of tag.
    #[error("`{selector}`: expected a `<{expected}>` element, found `<{actual}>`")]
    WrongElementKind {
        selector: String,
        expected: String,
        actual: String,
    },

    /// The cart item template's inner markup lacks a required marker.
    #[error("cart item template is missing marker `{marker}`")]
    MissingTemplateMarker { marker: String },
}

/// The outcome of verifying one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    page: Page,
    violations: Vec<Violation>,
}

impl CheckReport {
    pub(crate) const fn new(page: Page) -> Self {
        Self {
            page,
            violations: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// The page this report covers.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Every violation found, in document order of discovery.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether the document satisfies the whole contract.
    #[must_use]
    pub fn is_conformant(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_conformant() {
            return write!(f, "{}: conformant", self.page);
        }
        writeln!(f, "{}: {} violation(s)", self.page, self.violations.len())?;
        for violation in &self.violations {
            writeln!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conformant_report_displays_compactly() {
        let report = CheckReport::new(Page::Home);
        assert!(report.is_conformant());
        assert_eq!(report.to_string(), "index.html: conformant");
    }

    #[test]
    fn violations_are_listed_in_order() {
        let mut report = CheckReport::new(Page::Cart);
        report.push(Violation::MissingElement {
            selector: "[data-cart]".to_owned(),
        });
        report.push(Violation::EmptyText {
            selector: "[data-name]".to_owned(),
        });
        assert!(!report.is_conformant());
        let rendered = report.to_string();
        assert!(rendered.starts_with("cart.html: 2 violation(s)"));
        assert!(rendered.contains("missing element `[data-cart]`"));
        assert!(rendered.contains("`[data-name]`: text must not be empty"));
    }
}
