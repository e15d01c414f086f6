//! Compiled regex patterns and keyword constants used across extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`. They are
//! organized by their purpose in the pipeline: text cleaning, page-title
//! parsing, salary scanning, requirement phrases, and section detection.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches runs of spaces and tabs (newline-preserving normalization).
pub static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]+").expect("SPACE_RUNS regex")
});

/// Matches leading/trailing whitespace on lines.
pub static LINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]+|[ \t]+$").expect("LINE_WHITESPACE regex")
});

/// Matches multiple consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

/// Matches common separators used in page titles.
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[|•·]\s*|\s+[-–—]\s+").expect("TITLE_SEPARATOR regex")
});

/// Matches trailing job-board boilerplate on titles ("- job post",
/// "| Careers", "– Hiring Now" and similar).
pub static TITLE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*[-|–—:]\s*(?:job\s+post(?:ing)?s?|jobs?|careers?|hiring(?:\s+now)?|apply\s+(?:now|today)|current\s+openings?|job\s+openings?|employment|vacanc(?:y|ies)|job\s+details?)\s*$",
    )
    .expect("TITLE_NOISE regex")
});

// =============================================================================
// Page-Title Parsing Patterns
// =============================================================================

/// Matches the "Role at Company" page-title shape.
pub static TITLE_AT_COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<title>.{3,120}?)\s+at\s+(?P<company>.{2,80})$").expect("TITLE_AT_COMPANY regex")
});

/// Matches the "Company: Role" page-title shape.
pub static COMPANY_COLON_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<company>[^:|–—-]{2,60}):\s+(?P<title>.{3,120})$").expect("COMPANY_COLON_TITLE regex")
});

// =============================================================================
// Salary Patterns
// =============================================================================

/// Ordered salary patterns: currency ranges first, then single amounts with a
/// pay period, then labeled amounts. The first match wins.
pub static SALARY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "$90,000 - $120,000", "£45k–£60k", "$90K to $110K a year"
        r"(?i)[$£€]\s?\d{1,3}(?:,\d{3})*(?:\.\d+)?\s?k?\s*(?:-|–|—|to)\s*[$£€]?\s?\d{1,3}(?:,\d{3})*(?:\.\d+)?\s?k?(?:\s*(?:per|/|an?)\s*(?:year|annum|month|week|day|hour|yr|mo|wk|hr))?",
        // "120,000 - 150,000 USD", "90k–120k EUR"
        r"(?i)\d{1,3}(?:,\d{3})*(?:\.\d+)?\s?k?\s*(?:-|–|—|to)\s*\d{1,3}(?:,\d{3})*(?:\.\d+)?\s?k?\s*(?:USD|EUR|GBP|CAD|AUD|CHF)\b",
        // "$120,000 per year", "€60k/yr", "$55 an hour"
        r"(?i)[$£€]\s?\d{1,3}(?:,\d{3})*(?:\.\d+)?\s?k?\s*(?:per|/|an?)\s*(?:year|annum|month|week|day|hour|yr|mo|wk|hr)",
        // "Salary: 120,000", "Compensation: $95,000"
        r"(?i)(?:salary|compensation|pay(?:\s+range)?)\s*:?\s*[$£€]?\s?\d{2,3}(?:,\d{3})+(?:\.\d+)?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("salary regex"))
    .collect()
});

// =============================================================================
// Experience / Education Requirement Patterns
// =============================================================================

/// Patterns for experience requirements ("5+ years of experience",
/// "at least 3 years", "3-5 years").
pub static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b\d+\s*\+?\s*(?:years?|yrs?)(?:\s+of)?(?:\s+\w+){0,2}\s+experience\b",
        r"(?i)\b(?:minimum|at least)\s+(?:of\s+)?\d+\s+(?:years?|yrs?)\b",
        r"(?i)\b\d+\s*(?:-|–|to)\s*\d+\s+(?:years?|yrs?)\b",
        r"(?i)\bexperience\s*:\s*\d+\s*\+?\s*(?:years?|yrs?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience regex"))
    .collect()
});

/// Patterns for education requirements ("Bachelor's degree", "MSc in
/// Computer Science", "degree in Mathematics").
pub static EDUCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:bachelor|master|doctor)(?:'s|s)?\s+(?:degree|of\s+\w+)\b",
        r"(?i)\b(?:bsc|beng|msc|meng|mba|phd|ph\.d)\b",
        r"(?i)\b(?:ba|bs|ms|ma)\s+in\s+[a-z][a-z ]{2,40}",
        r"(?i)\bdegree\s+in\s+[a-z][a-z ]{2,40}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("education regex"))
    .collect()
});

// =============================================================================
// Keyword Prominence Patterns
// =============================================================================

/// Requirement phrasing that promotes nearby terms to high importance.
pub static REQUIRED_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:required|must[-\s]have|essential|mandatory)\b").expect("REQUIRED_PHRASE regex")
});

/// Emphasized spans that survive text extraction: markdown bold and
/// strong/b tags left in the description.
pub static EMPHASIS_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\*\*[^*]{2,160}\*\*|<strong[^>]*>.{2,200}?</strong>|<b[^>]*>.{2,200}?</b>")
        .expect("EMPHASIS_SPAN regex")
});

// =============================================================================
// Section Detection Patterns
// =============================================================================

/// Recognized section-header keywords. Used to terminate a detected
/// required/preferred span at the start of the following section.
pub static SECTION_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:requirements?|qualifications?|responsibilit(?:y|ies)|benefits?|perks?|compensation|about\s+(?:us|you|the\s+(?:role|team|company|job))|what\s+(?:we\s+offer|you'll\s+(?:do|need)|you\s+bring)|who\s+(?:we\s+are|you\s+are)|nice[-\s]to[-\s]have|must[-\s]have|bonus\s+points?|why\s+(?:join|work)|how\s+to\s+apply|interview\s+process|equal\s+opportunity|our\s+(?:values|mission|stack|team))\b",
    )
    .expect("SECTION_BREAK regex")
});

/// A generic "Title Case Words:" header line, e.g. "What We Offer:".
pub static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[A-Z][A-Za-z']*[ \t]+){0,3}[A-Z][A-Za-z']*[ \t]*:").expect("HEADER_LINE regex")
});

// =============================================================================
// Heuristic Keyword Lists
// =============================================================================

/// Role-indicative words for heading-based title detection.
pub const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "designer",
    "analyst",
    "architect",
    "scientist",
    "consultant",
    "specialist",
    "lead",
    "director",
    "administrator",
    "coordinator",
    "intern",
    "programmer",
    "technician",
    "recruiter",
    "accountant",
    "marketer",
    "researcher",
    "head of",
    "officer",
    "strategist",
];

/// Vocabulary typical of job-description prose, used to score candidate
/// content blocks in the generic parser.
pub const JOB_VOCABULARY: &[&str] = &[
    "responsibilities",
    "requirements",
    "qualifications",
    "experience",
    "skills",
    "benefits",
    "salary",
    "team",
    "role",
    "position",
    "candidate",
    "opportunity",
    "remote",
    "hybrid",
    "full-time",
    "part-time",
    "compensation",
    "degree",
    "collaborate",
    "stakeholders",
    "apply",
];
