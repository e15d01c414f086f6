//! Generic fallback parser: merges six extraction strategies with fixed
//! precedence.
//!
//! Per field the order is: structured `JobPosting` data, structural
//! selectors, heading keywords (title) or meta tags (company/location),
//! page-title parsing, and for salary a bounded full-page scan. Description
//! runs a dedicated chain ending at the meta description. Confidence is
//! multiplied by 0.85 when structured data supplied the title, else 0.70.

use std::sync::LazyLock;

use dom_query::Selection;
use regex::Regex;
use tracing::debug;

use crate::clean::{
    clean_block, clean_field, company_from_url, find_logo, resolve_url, strip_title_noise,
};
use crate::confidence::{self, ConfidenceFactors};
use crate::options::Options;
use crate::page::Page;
use crate::parsers::structured;
use crate::patterns::{
    COMPANY_COLON_TITLE, JOB_VOCABULARY, ROLE_KEYWORDS, TITLE_AT_COMPANY, TITLE_SEPARATOR,
};
use crate::result::ExtractionResult;
use crate::salary;

const STRUCTURED_TITLE_PENALTY: f64 = 0.85;
const HEURISTIC_PENALTY: f64 = 0.70;

/// Minimum text length for the block-scoring description strategies.
const MIN_BLOCK_LEN: usize = 200;

const TITLE_SELECTORS: &[&str] = &[
    "h1[class*='job-title']",
    "h1[class*='jobTitle']",
    "[class*='job-title'] h1",
    "[data-testid*='job-title']",
    "h1[class*='title']",
    "h1",
];

const COMPANY_SELECTORS: &[&str] = &[
    "[class*='company-name']",
    "[class*='companyName']",
    "[data-testid*='company']",
    "[class*='employer-name']",
    "[itemprop='hiringOrganization']",
];

const LOCATION_SELECTORS: &[&str] = &[
    "[class*='job-location']",
    "[class*='jobLocation']",
    "[data-testid*='location']",
    "[itemprop='jobLocation']",
    "[class*='location']",
];

const SALARY_SELECTORS: &[&str] = &[
    "[class*='salary']",
    "[class*='compensation']",
    "[class*='pay-range']",
    "[data-testid*='salary']",
];

const DESCRIPTION_SELECTORS: &[&str] = &[
    "[class*='job-description']",
    "[class*='jobDescription']",
    "#jobDescriptionText",
    "[itemprop='description']",
    "[class*='description']",
    "article",
    "main",
];

const LOGO_SELECTORS: &[&str] = &[
    "img[class*='logo']",
    "img[alt*='logo']",
    ".logo img",
    "header img",
];

const COMPANY_META_KEYS: &[&str] = &["og:site_name", "application-name"];
const LOCATION_META_KEYS: &[&str] = &["geo.placename", "og:locality"];
const DESCRIPTION_META_KEYS: &[&str] = &["description", "og:description"];

/// Headings that introduce the description body.
#[allow(clippy::expect_used)]
static DESCRIPTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:job description|about the (?:role|job|position)|the role|what you'll do|responsibilities|overview|position summary)\b",
    )
    .expect("DESCRIPTION_HEADING regex")
});

/// Class/id words that mark a content container.
#[allow(clippy::expect_used)]
static CONTENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)content|description|posting|job|detail|body|main").expect("CONTENT_NAME regex")
});

/// Extracts a posting from an arbitrary page.
#[must_use]
pub fn extract(page: &Page, url: &str, options: &Options) -> ExtractionResult {
    let mut result = ExtractionResult::new(url, "generic");

    let structured = structured::find_job_posting(&page.json_ld_blocks());
    if structured.is_some() {
        debug!("structured job posting data found");
    }
    let page_title = page
        .title_tag()
        .map(|raw| parse_page_title(&raw))
        .unwrap_or_default();

    let structured_title = clean_title(
        structured.as_ref().and_then(|node| node.title.clone()),
        options,
    );
    let structured_supplied_title = structured_title.is_some();

    result.title = structured_title
        .or_else(|| clean_title(page.first_text(TITLE_SELECTORS), options))
        .or_else(|| clean_title(heading_title(page), options))
        .or_else(|| clean_title(page_title.title.clone(), options));

    result.company = clean_field(
        structured.as_ref().and_then(|node| node.company.clone()),
        options.max_company_len,
    )
    .or_else(|| clean_field(page.first_text(COMPANY_SELECTORS), options.max_company_len))
    .or_else(|| clean_field(page.meta_first(COMPANY_META_KEYS), options.max_company_len))
    .or_else(|| clean_field(page_title.company.clone(), options.max_company_len))
    .or_else(|| company_from_url(url));

    result.location = clean_field(
        structured.as_ref().and_then(|node| node.location.clone()),
        options.max_location_len,
    )
    .or_else(|| clean_field(page.first_text(LOCATION_SELECTORS), options.max_location_len))
    .or_else(|| clean_field(page.meta_first(LOCATION_META_KEYS), options.max_location_len));

    result.salary = clean_field(
        structured.as_ref().and_then(|node| node.salary.clone()),
        options.max_salary_len,
    )
    .or_else(|| {
        clean_field(
            salary::find(page, SALARY_SELECTORS, options.salary_scan_window),
            options.max_salary_len,
        )
    });

    result.description = clean_block(
        description_text(page, structured.as_ref(), options),
        options.max_description_len,
    );

    result.company_logo_url = structured
        .as_ref()
        .and_then(|node| node.company_logo_url.as_deref())
        .and_then(|candidate| resolve_url(candidate, url))
        .or_else(|| find_logo(page, url, LOGO_SELECTORS));

    let base = confidence::score(&ConfidenceFactors::from(&result));
    let penalty = if structured_supplied_title {
        STRUCTURED_TITLE_PENALTY
    } else {
        HEURISTIC_PENALTY
    };
    result.confidence = confidence::round2(base * penalty);

    debug!(
        confidence = result.confidence,
        structured = structured_supplied_title,
        "generic extraction finished"
    );
    result
}

fn clean_title(raw: Option<String>, options: &Options) -> Option<String> {
    clean_field(raw, options.max_title_len)
        .map(|title| strip_title_noise(&title))
        .filter(|title| !title.is_empty())
}

/// First heading whose text contains a role-indicative keyword.
fn heading_title(page: &Page) -> Option<String> {
    page.headings().into_iter().find(|heading| {
        let lower = heading.to_lowercase();
        ROLE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
    })
}

/// Description strategy chain: structured data, selector list, heading
/// section walk, scored content block, largest named container, chrome-free
/// body text, meta description.
fn description_text(
    page: &Page,
    structured: Option<&structured::JobPostingNode>,
    options: &Options,
) -> Option<String> {
    structured
        .and_then(|node| node.description.clone())
        .or_else(|| page.first_text_min(DESCRIPTION_SELECTORS, options.min_description_len))
        .or_else(|| heading_section(page, options.min_description_len))
        .or_else(|| best_content_block(page))
        .or_else(|| largest_named_container(page))
        .or_else(|| {
            page.text_without_chrome()
                .filter(|text| text.chars().count() >= MIN_BLOCK_LEN)
        })
        .or_else(|| page.meta_first(DESCRIPTION_META_KEYS))
}

/// Collects sibling text after a description-introducing heading, stopping
/// at the next heading.
fn heading_section(page: &Page, min_len: usize) -> Option<String> {
    let doc = page.document();
    for heading in doc.select("h1, h2, h3").nodes() {
        let heading_text = Selection::from(*heading).text();
        if !DESCRIPTION_HEADING.is_match(heading_text.trim()) {
            continue;
        }
        let mut collected = String::new();
        let mut sibling = heading.next_element_sibling();
        while let Some(current) = sibling {
            if let Some(name) = current.node_name() {
                if matches!(&*name, "h1" | "h2" | "h3") {
                    break;
                }
            }
            let text = Selection::from(current).text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                collected.push_str(trimmed);
                collected.push('\n');
            }
            sibling = current.next_element_sibling();
        }
        let collected = collected.trim().to_string();
        if collected.chars().count() >= min_len {
            return Some(collected);
        }
    }
    None
}

/// Highest-scoring content block by job-vocabulary density, list density,
/// and length.
fn best_content_block(page: &Page) -> Option<String> {
    let doc = page.document();
    let mut best: Option<(usize, String)> = None;
    for node in doc.select("div, section, article, main").nodes() {
        let sel = Selection::from(*node);
        let text = sel.text();
        let trimmed = text.trim();
        let char_count = trimmed.chars().count();
        if char_count < MIN_BLOCK_LEN {
            continue;
        }
        let lower = trimmed.to_lowercase();
        let vocab_hits = JOB_VOCABULARY
            .iter()
            .filter(|word| lower.contains(*word))
            .count();
        if vocab_hits == 0 {
            continue;
        }
        let list_items = sel.select("li").length();
        let score = vocab_hits * 10 + list_items * 2 + (char_count / 100).min(50);
        if best.as_ref().is_none_or(|(top, _)| score > *top) {
            best = Some((score, trimmed.to_string()));
        }
    }
    best.map(|(_, text)| text)
}

/// Longest text among containers whose class or id names content.
fn largest_named_container(page: &Page) -> Option<String> {
    let doc = page.document();
    let mut best: Option<(usize, String)> = None;
    for node in doc.select("div, section, article, main").nodes() {
        let sel = Selection::from(*node);
        let name = format!(
            "{} {}",
            sel.attr("class").unwrap_or_default(),
            sel.attr("id").unwrap_or_default()
        );
        if !CONTENT_NAME.is_match(&name) {
            continue;
        }
        let text = sel.text();
        let trimmed = text.trim();
        let char_count = trimmed.chars().count();
        if char_count < MIN_BLOCK_LEN {
            continue;
        }
        if best.as_ref().is_none_or(|(top, _)| char_count > *top) {
            best = Some((char_count, trimmed.to_string()));
        }
    }
    best.map(|(_, text)| text)
}

#[derive(Debug, Default, Clone)]
struct PageTitleParts {
    title: Option<String>,
    company: Option<String>,
}

/// Parses a page `<title>`: "X at Y", then "Y: X", then a separator split
/// with plausible length bounds. The part carrying a role keyword is
/// preferred as the title.
fn parse_page_title(raw: &str) -> PageTitleParts {
    let cleaned = strip_title_noise(raw.trim());
    if cleaned.is_empty() {
        return PageTitleParts::default();
    }

    if let Some(caps) = TITLE_AT_COMPANY.captures(&cleaned) {
        return PageTitleParts {
            title: caps.name("title").map(|m| m.as_str().trim().to_string()),
            company: caps.name("company").map(|m| m.as_str().trim().to_string()),
        };
    }
    if let Some(caps) = COMPANY_COLON_TITLE.captures(&cleaned) {
        return PageTitleParts {
            title: caps.name("title").map(|m| m.as_str().trim().to_string()),
            company: caps.name("company").map(|m| m.as_str().trim().to_string()),
        };
    }

    let parts: Vec<&str> = TITLE_SEPARATOR
        .split(&cleaned)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [] => PageTitleParts::default(),
        [only] => PageTitleParts {
            title: plausible_title(only).then(|| (*only).to_string()),
            company: None,
        },
        _ => {
            let title_idx = parts
                .iter()
                .position(|part| {
                    let lower = part.to_lowercase();
                    ROLE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
                })
                .unwrap_or(0);
            let title = plausible_title(parts[title_idx]).then(|| parts[title_idx].to_string());
            let company = parts
                .iter()
                .enumerate()
                .find(|(i, part)| *i != title_idx && plausible_company(part))
                .map(|(_, part)| (*part).to_string());
            PageTitleParts { title, company }
        }
    }
}

fn plausible_title(text: &str) -> bool {
    (3..=120).contains(&text.chars().count())
}

fn plausible_company(text: &str) -> bool {
    (2..=60).contains(&text.chars().count())
}
