//! Salary scanner: pattern matching over targeted elements and page text.

use crate::clean::{squash_whitespace, truncate_chars};
use crate::page::Page;
use crate::patterns::SALARY_PATTERNS;

/// Returns the first salary-looking match in `text`, whitespace-squashed.
///
/// Patterns are tried in order (ranges, then single amounts with a pay
/// period, then labeled amounts); the first pattern that matches wins.
#[must_use]
pub fn scan(text: &str) -> Option<String> {
    for pattern in SALARY_PATTERNS.iter() {
        if let Some(found) = pattern.find(text) {
            return Some(squash_whitespace(found.as_str()));
        }
    }
    None
}

/// Finds a salary on a page: targeted elements first, then the leading
/// `window` characters of the full page text as a last resort.
#[must_use]
pub fn find(page: &Page, targeted_selectors: &[&str], window: usize) -> Option<String> {
    for selector in targeted_selectors {
        if let Some(text) = page.select_text(selector) {
            if let Some(salary) = scan(&text) {
                return Some(salary);
            }
        }
    }
    let text = page.text();
    scan(truncate_chars(&text, window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_squashes_matched_text() {
        assert_eq!(
            scan("We pay \u{a3}45,000 -  \u{a3}55,000 plus equity"),
            Some("\u{a3}45,000 - \u{a3}55,000".to_string())
        );
    }

    #[test]
    fn scan_returns_none_without_salary() {
        assert_eq!(scan("A growing team of 20 people founded in 2015"), None);
    }

    #[test]
    fn find_prefers_targeted_elements() {
        let page = Page::parse(
            r#"<body>
                <p>Compensation: $200,000 mentioned in prose first</p>
                <div class="salary">$90,000 - $120,000</div>
            </body>"#,
        );
        assert_eq!(
            find(&page, &[".salary"], 10_000),
            Some("$90,000 - $120,000".to_string())
        );
    }

    #[test]
    fn find_falls_back_to_page_text() {
        let page = Page::parse("<body><p>Base pay is $120,000 per year.</p></body>");
        assert_eq!(find(&page, &[".salary"], 10_000), Some("$120,000 per year".to_string()));
    }

    #[test]
    fn find_respects_scan_window() {
        let filler = "word ".repeat(2500);
        let page = Page::parse(&format!(
            "<body><p>{filler}</p><p>$100,000 per year</p></body>"
        ));
        assert_eq!(find(&page, &[], 10_000), None);
        assert!(find(&page, &[], 20_000).is_some());
    }
}
