//! Page representation: a parsed, queryable snapshot of a webpage.
//!
//! `Page` wraps a `dom_query::Document` and exposes the operations parsers
//! need: first-match text/attribute lookup over ordered selector lists,
//! meta-tag lookup, JSON-LD block retrieval, and raw page text with or
//! without navigation chrome. All table-driven selector lookups go through
//! `try_select`, so an invalid pattern degrades to "no match" instead of
//! aborting extraction.

use std::sync::LazyLock;

use dom_query::{Document, Selection};
use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Matches a charset declaration in either the `<meta charset="...">` or the
/// `http-equiv` `content="...; charset=..."` form.
#[allow(clippy::expect_used)]
static CHARSET_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("charset regex")
});

/// Elements stripped before taking chrome-free page text.
const CHROME_SELECTOR: &str = "script, style, noscript, nav, header, footer, aside, form, iframe";

/// A parsed snapshot of one webpage.
pub struct Page {
    doc: Document,
}

impl Page {
    /// Parses an HTML string into a page.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self { doc: Document::from(html) }
    }

    /// Parses raw HTML bytes, decoding them first.
    ///
    /// The charset is sniffed from a `<meta charset>` or `http-equiv`
    /// declaration in the first 1024 bytes; UTF-8 is the default. Decoding
    /// is lossy, so invalid sequences become replacement characters rather
    /// than errors.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&decode_html(bytes))
    }

    /// The underlying document, for callers that need raw DOM access.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Text of the first element matching `selector` whose trimmed text is
    /// non-empty.
    #[must_use]
    pub fn select_text(&self, selector: &str) -> Option<String> {
        self.select_text_min(selector, 1)
    }

    /// Text of the first element matching `selector` whose trimmed text is
    /// at least `min_chars` characters long.
    #[must_use]
    pub fn select_text_min(&self, selector: &str, min_chars: usize) -> Option<String> {
        let sel = self.checked_select(selector)?;
        for node in sel.nodes() {
            let text = Selection::from(*node).text();
            let trimmed = text.trim();
            if !trimmed.is_empty() && trimmed.chars().count() >= min_chars {
                return Some(trimmed.to_string());
            }
        }
        None
    }

    /// Value of `attr` on the first matching element that carries it
    /// non-empty.
    #[must_use]
    pub fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let sel = self.checked_select(selector)?;
        for node in sel.nodes() {
            if let Some(value) = Selection::from(*node).attr(attr) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// First non-empty text over an ordered selector list.
    #[must_use]
    pub fn first_text(&self, selectors: &[&str]) -> Option<String> {
        selectors.iter().find_map(|s| self.select_text(s))
    }

    /// First text of at least `min_chars` characters over an ordered
    /// selector list.
    #[must_use]
    pub fn first_text_min(&self, selectors: &[&str], min_chars: usize) -> Option<String> {
        selectors.iter().find_map(|s| self.select_text_min(s, min_chars))
    }

    /// First non-empty attribute value over an ordered selector list.
    #[must_use]
    pub fn first_attr(&self, selectors: &[&str], attr: &str) -> Option<String> {
        selectors.iter().find_map(|s| self.select_attr(s, attr))
    }

    /// Content of the first meta tag whose `name`, `property`, or
    /// `itemprop` equals `key`.
    #[must_use]
    pub fn meta_content(&self, key: &str) -> Option<String> {
        for attr in ["name", "property", "itemprop"] {
            let selector = format!(r#"meta[{attr}="{key}"]"#);
            if let Some(content) = self.select_attr(&selector, "content") {
                return Some(content);
            }
        }
        None
    }

    /// First meta content found over an ordered key list.
    #[must_use]
    pub fn meta_first(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.meta_content(key))
    }

    /// All parseable JSON-LD blocks on the page, in document order.
    ///
    /// Blocks that fail to parse are skipped and logged, never surfaced as
    /// errors.
    #[must_use]
    pub fn json_ld_blocks(&self) -> Vec<Value> {
        let mut blocks = Vec::new();
        for script in self.doc.select(r#"script[type="application/ld+json"]"#).nodes() {
            let json_text = Selection::from(*script).text();
            let trimmed = json_text.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<Value>(trimmed) {
                Ok(value) => blocks.push(value),
                Err(err) => debug!(error = %err, "skipping unparseable JSON-LD block"),
            }
        }
        blocks
    }

    /// Trimmed `<title>` text.
    #[must_use]
    pub fn title_tag(&self) -> Option<String> {
        self.select_text("title")
    }

    /// Trimmed `h1`/`h2`/`h3` heading texts in document order.
    #[must_use]
    pub fn headings(&self) -> Vec<String> {
        self.doc
            .select("h1, h2, h3")
            .nodes()
            .iter()
            .filter_map(|node| {
                let text = Selection::from(*node).text();
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect()
    }

    /// Full visible body text.
    #[must_use]
    pub fn text(&self) -> String {
        self.doc.select("body").text().to_string()
    }

    /// Body text with scripts, styles, and navigation chrome stripped.
    ///
    /// Works on a re-parsed copy so the original document is never mutated
    /// and repeated extraction stays deterministic.
    #[must_use]
    pub fn text_without_chrome(&self) -> Option<String> {
        let stripped = Document::from(self.doc.html().to_string());
        stripped.select(CHROME_SELECTOR).remove();
        let text = stripped.select("body").text();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn checked_select(&self, selector: &str) -> Option<Selection<'_>> {
        let sel = self.doc.try_select(selector);
        if sel.is_none() {
            debug!(selector, "invalid selector, treated as no match");
        }
        sel
    }
}

/// Decode HTML bytes to a string using the declared charset, if any.
fn decode_html(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

/// Sniff the charset declaration from the first 1024 bytes.
fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = &bytes[..bytes.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(label) = CHARSET_DECL.captures(&head_str).and_then(|c| c.get(1)) {
        if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
            return encoding;
        }
    }
    UTF_8
}
