//! Field cleaners applied to every extracted value before it enters a result.
//!
//! Cleaners normalize whitespace, enforce per-field length bounds, strip
//! job-board boilerplate from titles, resolve relative URLs, and infer a
//! company name from a URL when no on-page signal exists. Empty values
//! always resolve to `None`, never `Some("")`.

use url::Url;

use crate::page::Page;
use crate::patterns::{
    LINE_WHITESPACE, MULTIPLE_NEWLINES, SPACE_RUNS, TITLE_NOISE, WHITESPACE_NORMALIZE,
};

/// Hosts whose first path segment names the hiring company.
const ATS_PATH_HOSTS: &[&str] = &["boards.greenhouse.io", "jobs.lever.co"];

/// Host labels that name a job board, not a company.
const BOARD_LABELS: &[&str] = &[
    "linkedin",
    "indeed",
    "glassdoor",
    "monster",
    "ziprecruiter",
    "dice",
    "wellfound",
    "greenhouse",
    "lever",
];

/// Meta keys tried for a logo image, in order.
const LOGO_META_KEYS: &[&str] = &["og:image", "twitter:image", "twitter:image:src"];

/// Icon link selectors tried after meta images, in order.
const ICON_SELECTORS: &[&str] = &[
    r#"link[rel="apple-touch-icon"]"#,
    r#"link[rel="icon"]"#,
    r#"link[rel="shortcut icon"]"#,
];

/// Collapses all whitespace runs to single spaces and trims.
#[must_use]
pub fn squash_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Normalizes whitespace while keeping line structure.
///
/// Space/tab runs collapse to one space, line edges are trimmed, and runs of
/// blank lines collapse to a single blank line. Used for descriptions so
/// section headers stay on their own lines.
#[must_use]
pub fn tidy_block_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let spaced = SPACE_RUNS.replace_all(&unified, " ");
    let trimmed = LINE_WHITESPACE.replace_all(&spaced, "");
    MULTIPLE_NEWLINES.replace_all(&trimmed, "\n\n").trim().to_string()
}

/// Truncates to at most `max_chars` characters on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Cleans a single-line field: squash whitespace, truncate, empty to `None`.
#[must_use]
pub fn clean_field(value: Option<String>, max_chars: usize) -> Option<String> {
    let squashed = squash_whitespace(&value?);
    if squashed.is_empty() {
        return None;
    }
    Some(truncate_chars(&squashed, max_chars).trim_end().to_string())
}

/// Cleans a block-text field: keep line structure, truncate, empty to `None`.
#[must_use]
pub fn clean_block(value: Option<String>, max_chars: usize) -> Option<String> {
    let tidied = tidy_block_text(&value?);
    if tidied.is_empty() {
        return None;
    }
    Some(truncate_chars(&tidied, max_chars).trim_end().to_string())
}

/// Strips trailing job-board boilerplate from a title ("- job post",
/// "| Careers"). Applied repeatedly until stable, since boards stack
/// suffixes.
#[must_use]
pub fn strip_title_noise(title: &str) -> String {
    let mut current = title.trim().to_string();
    loop {
        let stripped = TITLE_NOISE.replace(&current, "").trim().to_string();
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}

/// Resolves a URL candidate against a base page URL.
///
/// Absolute http(s) URLs pass through, `data:` URLs are kept as-is,
/// protocol-relative and relative paths are joined against the base.
/// Script/mail/tel pseudo-URLs and unresolvable candidates yield `None`.
#[must_use]
pub fn resolve_url(candidate: &str, base: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }
    if candidate.starts_with("data:") {
        return Some(candidate.to_string());
    }
    if candidate.starts_with("javascript:")
        || candidate.starts_with("mailto:")
        || candidate.starts_with("tel:")
    {
        return None;
    }
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        return Url::parse(candidate).ok().map(|u| u.to_string());
    }
    let base_url = Url::parse(base).ok()?;
    base_url.join(candidate).ok().map(|u| u.to_string())
}

/// Infers a company name from a job-posting URL.
///
/// ATS hosts carry the company in the first path segment
/// (`boards.greenhouse.io/acme-corp` becomes "Acme Corp"); otherwise the
/// first host label is used after stripping `www.`/`jobs.`/`careers.`
/// prefixes. Job-board hosts yield `None` since their domain names the
/// board, not the employer.
#[must_use]
pub fn company_from_url(url_str: &str) -> Option<String> {
    let url = Url::parse(url_str).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();

    if ATS_PATH_HOSTS.contains(&host.as_str()) {
        let segment = url.path_segments()?.find(|s| !s.is_empty())?;
        let name = title_case_segment(segment);
        return (!name.is_empty()).then_some(name);
    }

    let mut label = host.as_str();
    for prefix in ["www.", "jobs.", "careers."] {
        label = label.strip_prefix(prefix).unwrap_or(label);
    }
    let first = label.split('.').next()?;
    if first.len() < 2 || BOARD_LABELS.contains(&first) {
        return None;
    }
    Some(capitalize(first))
}

/// Finds a company logo: preferred `img` selectors first, then OpenGraph /
/// Twitter images, then icon links. All candidates resolve against the page
/// URL.
#[must_use]
pub fn find_logo(page: &Page, base_url: &str, preferred: &[&str]) -> Option<String> {
    for selector in preferred {
        for attr in ["src", "data-src"] {
            if let Some(candidate) = page.select_attr(selector, attr) {
                if let Some(resolved) = resolve_url(&candidate, base_url) {
                    return Some(resolved);
                }
            }
        }
    }
    if let Some(candidate) = page.meta_first(LOGO_META_KEYS) {
        if let Some(resolved) = resolve_url(&candidate, base_url) {
            return Some(resolved);
        }
    }
    for selector in ICON_SELECTORS {
        if let Some(candidate) = page.select_attr(selector, "href") {
            if let Some(resolved) = resolve_url(&candidate, base_url) {
                return Some(resolved);
            }
        }
    }
    None
}

/// Turns a URL path segment like `acme-corp` into "Acme Corp".
fn title_case_segment(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_collapses_all_whitespace() {
        assert_eq!(squash_whitespace("  Senior \n\t Engineer  "), "Senior Engineer");
    }

    #[test]
    fn tidy_keeps_line_structure() {
        let text = "Requirements:   \n\n\n\n- Rust\t skills\n   - Async experience   ";
        assert_eq!(tidy_block_text(text), "Requirements:\n\n- Rust skills\n- Async experience");
    }

    #[test]
    fn clean_field_empty_is_none() {
        assert_eq!(clean_field(Some("   \n ".to_string()), 100), None);
        assert_eq!(clean_field(None, 100), None);
        assert_eq!(clean_field(Some("Acme".to_string()), 100), Some("Acme".to_string()));
    }

    #[test]
    fn clean_field_truncates_on_char_boundary() {
        let value = Some("caf\u{e9} engineering team".to_string());
        assert_eq!(clean_field(value, 4), Some("caf\u{e9}".to_string()));
    }

    #[test]
    fn strip_title_noise_removes_stacked_suffixes() {
        assert_eq!(strip_title_noise("Senior Engineer - job post"), "Senior Engineer");
        assert_eq!(strip_title_noise("Backend Developer - Jobs | Careers"), "Backend Developer");
        assert_eq!(strip_title_noise("Head of Careers Advice"), "Head of Careers Advice");
    }

    #[test]
    fn resolve_url_handles_each_form() {
        let base = "https://example.com/jobs/123";
        assert_eq!(
            resolve_url("https://cdn.example.com/logo.png", base),
            Some("https://cdn.example.com/logo.png".to_string())
        );
        assert_eq!(
            resolve_url("/static/logo.png", base),
            Some("https://example.com/static/logo.png".to_string())
        );
        assert_eq!(
            resolve_url("//cdn.example.com/logo.png", base),
            Some("https://cdn.example.com/logo.png".to_string())
        );
        assert_eq!(
            resolve_url("data:image/png;base64,abc", base),
            Some("data:image/png;base64,abc".to_string())
        );
        assert_eq!(resolve_url("javascript:void(0)", base), None);
        assert_eq!(resolve_url("", base), None);
    }

    #[test]
    fn company_from_ats_path() {
        assert_eq!(
            company_from_url("https://boards.greenhouse.io/acme-corp/jobs/123"),
            Some("Acme Corp".to_string())
        );
        assert_eq!(
            company_from_url("https://jobs.lever.co/stripe/abc-def"),
            Some("Stripe".to_string())
        );
    }

    #[test]
    fn company_from_host_label() {
        assert_eq!(
            company_from_url("https://careers.acme.com/openings/1"),
            Some("Acme".to_string())
        );
        assert_eq!(
            company_from_url("https://www.globex.io/jobs"),
            Some("Globex".to_string())
        );
    }

    #[test]
    fn company_not_inferred_from_board_hosts() {
        assert_eq!(company_from_url("https://www.linkedin.com/jobs/view/123"), None);
        assert_eq!(company_from_url("https://indeed.com/viewjob?jk=abc"), None);
    }

    #[test]
    fn find_logo_prefers_img_then_meta_then_icon() {
        let html = r#"
            <head>
                <meta property="og:image" content="/og.png">
                <link rel="icon" href="/favicon.ico">
            </head>
            <body><img class="logo" src="/img/logo.svg"></body>
        "#;
        let page = Page::parse(html);
        let base = "https://example.com/jobs/1";

        assert_eq!(
            find_logo(&page, base, &["img.logo"]),
            Some("https://example.com/img/logo.svg".to_string())
        );
        assert_eq!(
            find_logo(&page, base, &["img.missing"]),
            Some("https://example.com/og.png".to_string())
        );

        let no_meta = Page::parse(r#"<head><link rel="icon" href="/favicon.ico"></head>"#);
        assert_eq!(
            find_logo(&no_meta, base, &[]),
            Some("https://example.com/favicon.ico".to_string())
        );
    }
}
