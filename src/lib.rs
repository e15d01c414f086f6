//! # jobglean
//!
//! Job posting extraction and keyword analysis for fetched web pages.
//!
//! Given the HTML of a job posting, this library pulls out the structured
//! fields (title, company, location, salary, description) together with a
//! 0-1 confidence score, then mines the description for the technical
//! skills, tools, soft skills, and experience requirements a candidate
//! should address in an application.
//!
//! ## Quick Start
//!
//! ```rust
//! use jobglean::{extract_job_posting_from_html, extract_keywords};
//!
//! let html = r#"<html><head><title>Platform Engineer at Acme | Jobs</title></head>
//! <body><div class="job-description">We are hiring a platform engineer to scale our
//! infrastructure. Requirements: Rust, Kubernetes, PostgreSQL. Nice to have: Terraform.
//! You will join the platform team and own our deployment pipeline end to end.</div>
//! </body></html>"#;
//!
//! let result = extract_job_posting_from_html(html, "https://acme.example/careers/123");
//! assert_eq!(result.title.as_deref(), Some("Platform Engineer"));
//! assert_eq!(result.company.as_deref(), Some("Acme"));
//!
//! let keywords = extract_keywords(result.description.as_deref().unwrap_or(""));
//! assert!(keywords.iter().any(|k| k.term == "Rust"));
//! ```
//!
//! ## Features
//!
//! - **Site parsers**: tuned selector sets for LinkedIn, Indeed, Glassdoor,
//!   Greenhouse, and Lever boards, with a generic fallback for every other page
//! - **Structured data first**: embedded JSON-LD job postings are preferred
//!   over scraping when a page carries them
//! - **Keyword analysis**: dictionary-driven extraction with section-aware
//!   required/preferred classification and importance ratings
//! - **Coverage**: aggregate how much of the extracted keyword list an
//!   application has addressed
//!
//! Extraction never fails: missing signals become `None` fields and a lower
//! confidence score, not errors.

mod error;
mod options;
mod patterns;
mod result;

/// Parsed page wrapper providing structural queries over fetched HTML.
pub mod page;

/// Site parser registry and per-site extraction strategies.
pub mod parsers;

/// Keyword extraction, section detection, and coverage aggregation.
pub mod keywords;

/// Text cleanup and URL helpers shared by the parsers.
pub mod clean;

/// Salary pattern scanning.
pub mod salary;

/// Confidence scoring over extracted fields.
pub mod confidence;

// Public API - re-exports
pub use error::{Error, Result};
pub use keywords::coverage::compute_coverage;
pub use keywords::dictionary::KeywordDictionary;
pub use keywords::{extract_keywords, KeywordExtractor};
pub use options::Options;
pub use page::Page;
pub use result::{
    keywords_from_json, keywords_to_json, CategoryCoverage, ConfidenceLabel, CoverageSummary,
    ExtractedKeyword, ExtractionResult, KeywordCategory, KeywordImportance, SectionSpan,
};

/// Extracts a job posting from a parsed page using default options.
///
/// The parser is chosen from the URL; pages no site parser claims go
/// through the generic strategy chain. Never fails: fields that cannot be
/// extracted come back as `None` and the confidence score reflects what
/// was found.
///
/// # Example
///
/// ```rust
/// use jobglean::{extract_job_posting, Page};
///
/// let page = Page::parse(
///     "<html><head><title>Data Analyst at Initech</title></head><body></body></html>",
/// );
/// let result = extract_job_posting(&page, "https://initech.example/jobs/7");
/// assert_eq!(result.title.as_deref(), Some("Data Analyst"));
/// assert_eq!(result.company.as_deref(), Some("Initech"));
/// ```
#[must_use]
pub fn extract_job_posting(page: &Page, url: &str) -> ExtractionResult {
    extract_job_posting_with_options(page, url, &Options::default())
}

/// Extracts a job posting from a parsed page with custom options.
///
/// # Example
///
/// ```rust
/// use jobglean::{extract_job_posting_with_options, Options, Page};
///
/// let page = Page::parse("<html><body><h1>Accountant</h1></body></html>");
/// let options = Options {
///     max_title_len: 40,
///     ..Options::default()
/// };
/// let result = extract_job_posting_with_options(&page, "https://example.com/careers", &options);
/// assert_eq!(result.title.as_deref(), Some("Accountant"));
/// ```
#[must_use]
pub fn extract_job_posting_with_options(
    page: &Page,
    url: &str,
    options: &Options,
) -> ExtractionResult {
    let parser = parsers::select_parser(url, page);
    parser.extract(page, url, options)
}

/// Parses HTML and extracts a job posting in one step.
///
/// # Example
///
/// ```rust
/// use jobglean::extract_job_posting_from_html;
///
/// let html = "<html><body><h1 class=\"job-title\">Staff Engineer</h1></body></html>";
/// let result = extract_job_posting_from_html(html, "https://jobs.example.org/42");
/// assert_eq!(result.title.as_deref(), Some("Staff Engineer"));
/// ```
#[must_use]
pub fn extract_job_posting_from_html(html: &str, url: &str) -> ExtractionResult {
    extract_job_posting(&Page::parse(html), url)
}

/// Extracts a job posting from raw HTML bytes with automatic encoding
/// detection.
///
/// The character encoding is read from `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" ...>` declarations, defaulting to
/// UTF-8. Undecodable bytes become replacement characters rather than
/// errors.
///
/// # Example
///
/// ```rust
/// use jobglean::extract_job_posting_from_bytes;
///
/// // ISO-8859-1 encoded page with a charset declaration.
/// let html = b"<html><head><meta charset=\"ISO-8859-1\">\
///     <title>Ing\xE9nieur at Soci\xE9t\xE9 G\xE9n\xE9rale</title></head><body></body></html>";
/// let result = extract_job_posting_from_bytes(html, "https://societegenerale.example/jobs/1");
/// assert_eq!(result.title.as_deref(), Some("Ing\u{e9}nieur"));
/// ```
#[must_use]
pub fn extract_job_posting_from_bytes(bytes: &[u8], url: &str) -> ExtractionResult {
    extract_job_posting(&Page::from_bytes(bytes), url)
}
