//! Locates required and preferred qualification sections in a description.
//!
//! A section starts right after a known header phrase and runs until the
//! next section keyword, the next `Title Case:` header line, or the end of
//! the text, whichever comes first. Spans are byte offsets into the
//! original text.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::{HEADER_LINE, SECTION_BREAK};
use crate::result::SectionSpan;

/// Which qualification section to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Required,
    Preferred,
}

// Ordered by specificity: when several phrases occur, the earliest list
// entry wins regardless of position in the text.
const REQUIRED_HEADERS: &[&str] = &[
    "required qualifications",
    "required skills",
    "minimum qualifications",
    "basic qualifications",
    "requirements",
    "must have",
    "must-have",
    "what you'll need",
    "what we're looking for",
    "who you are",
];

const PREFERRED_HEADERS: &[&str] = &[
    "preferred qualifications",
    "preferred skills",
    "preferred experience",
    "nice to have",
    "nice-to-have",
    "bonus points",
    "good to have",
];

static REQUIRED_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_headers(REQUIRED_HEADERS));

static PREFERRED_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_headers(PREFERRED_HEADERS));

fn compile_headers(headers: &[&str]) -> Vec<Regex> {
    headers
        .iter()
        .map(|header| {
            Regex::new(&format!("(?i){}", regex::escape(header))).expect("valid header pattern")
        })
        .collect()
}

/// Finds the span of the first matching section header of `kind`, or `None`
/// when no header phrase occurs in the text.
#[must_use]
pub fn find_section(text: &str, kind: SectionKind) -> Option<SectionSpan> {
    let patterns: &[Regex] = match kind {
        SectionKind::Required => &REQUIRED_PATTERNS,
        SectionKind::Preferred => &PREFERRED_PATTERNS,
    };
    for pattern in patterns {
        if let Some(found) = pattern.find(text) {
            let start = found.end();
            return Some(SectionSpan {
                start,
                end: section_end(text, start),
            });
        }
    }
    None
}

fn section_end(text: &str, start: usize) -> usize {
    let mut end = text.len();
    if let Some(brk) = SECTION_BREAK.find_at(text, start) {
        end = end.min(brk.start());
    }
    if let Some(header) = HEADER_LINE.find_at(text, start) {
        end = end.min(header.start());
    }
    end
}
