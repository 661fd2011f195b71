//! Thin DOM wrapper over `scraper` with the queries the checks need.

use scraper::{ElementRef, Html, Selector};

/// Parse a selector known to be valid at compile time.
///
/// Every selector in this crate is a string literal (or built from the
/// marker constants), so a parse failure is a programming bug.
pub(crate) fn selector(raw: &str) -> Selector {
    Selector::parse(raw).expect("selector is statically valid")
}

/// CSS attribute selector for a `data-*` marker.
pub(crate) fn marker_selector(marker: &str) -> String {
    format!("[{marker}]")
}

/// Concatenated, trimmed text content of an element.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Find the first anchor under `scope` whose `href` equals `target`.
pub(crate) fn link_by_href<'a>(scope: ElementRef<'a>, target: &str) -> Option<ElementRef<'a>> {
    let anchors = selector("a");
    scope
        .select(&anchors)
        .find(|a| a.value().attr("href") == Some(target))
}

/// Find the first anchor under `scope` whose visible text equals `text`.
pub(crate) fn link_by_text<'a>(scope: ElementRef<'a>, text: &str) -> Option<ElementRef<'a>> {
    let anchors = selector("a");
    scope.select(&anchors).find(|a| text_of(*a) == text)
}

/// A freshly parsed document.
///
/// Each verification run parses its own `Dom`; no state leaks between
/// loads of the same markup.
pub struct Dom {
    html: Html,
}

impl Dom {
    /// Parse raw markup as a full document.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// The first element matching `raw`, if any.
    pub(crate) fn select_one(&self, raw: &str) -> Option<ElementRef<'_>> {
        self.html.select(&selector(raw)).next()
    }

    /// All elements matching `raw`.
    pub(crate) fn select_all(&self, raw: &str) -> Vec<ElementRef<'_>> {
        self.html.select(&selector(raw)).collect()
    }

    /// The document title's text, if a `<title>` exists.
    pub(crate) fn title(&self) -> Option<String> {
        self.select_one("head > title").map(text_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<!DOCTYPE html>
        <html><head><title> Hello </title></head>
        <body><nav><a href="a.html">A</a><a href="b.html">B page</a></nav></body></html>"#;

    #[test]
    fn title_is_trimmed() {
        assert_eq!(Dom::parse(DOC).title().as_deref(), Some("Hello"));
    }

    #[test]
    fn links_are_found_by_href_and_text() {
        let dom = Dom::parse(DOC);
        let nav = dom.select_one("nav").expect("nav exists");
        assert!(link_by_href(nav, "a.html").is_some());
        assert!(link_by_href(nav, "c.html").is_none());
        let by_text = link_by_text(nav, "B page").expect("anchor with text");
        assert_eq!(by_text.value().attr("href"), Some("b.html"));
    }
}
