//! Keyword extraction from job description text.
//!
//! Scans the description against the dictionary term lists with
//! case-insensitive word-boundary patterns, classifies technical terms by
//! the qualification section their first occurrence falls in, and rates
//! every keyword's importance from frequency and prominence signals.

pub mod coverage;
pub mod dictionary;
pub mod sections;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::clean::squash_whitespace;
use crate::patterns::{EDUCATION_PATTERNS, EMPHASIS_SPAN, EXPERIENCE_PATTERNS, REQUIRED_PHRASE};
use crate::result::{ExtractedKeyword, KeywordCategory, KeywordImportance, SectionSpan};

use dictionary::{KeywordDictionary, TermKind};
use sections::{find_section, SectionKind};

/// Characters of surrounding text kept on each side of a context snippet.
const CONTEXT_RADIUS: usize = 50;

/// Context snippets recorded per keyword.
const MAX_CONTEXTS: usize = 3;

/// Characters around a match searched for requirement phrasing.
const REQUIRED_PHRASE_WINDOW: usize = 60;

/// Minimum length for a pattern-derived keyword term.
const MIN_PATTERN_TERM_LEN: usize = 3;

const HIGH_FREQUENCY: u32 = 3;
const MEDIUM_FREQUENCY: u32 = 2;

static DEFAULT_EXTRACTOR: LazyLock<KeywordExtractor> =
    LazyLock::new(|| KeywordExtractor::new(&KeywordDictionary::default()));

/// Extracts keywords from a description using the built-in dictionary.
#[must_use]
pub fn extract_keywords(description: &str) -> Vec<ExtractedKeyword> {
    DEFAULT_EXTRACTOR.extract(description)
}

struct CompiledTerm {
    term: String,
    kind: TermKind,
    pattern: Regex,
}

/// Dictionary terms compiled into word-boundary matchers, built once and
/// reused across extractions.
pub struct KeywordExtractor {
    terms: Vec<CompiledTerm>,
}

impl KeywordExtractor {
    #[must_use]
    pub fn new(dictionary: &KeywordDictionary) -> Self {
        let mut terms = Vec::new();
        for (kind, list) in dictionary.term_groups() {
            for term in list {
                match compile_term(term) {
                    Ok(pattern) => terms.push(CompiledTerm {
                        term: term.clone(),
                        kind,
                        pattern,
                    }),
                    Err(err) => debug!(term = %term, %err, "skipping unusable dictionary term"),
                }
            }
        }
        Self { terms }
    }

    /// Scans `description` and returns the classified keywords, sorted by
    /// importance and then by descending frequency. Blank input yields an
    /// empty list.
    #[must_use]
    pub fn extract(&self, description: &str) -> Vec<ExtractedKeyword> {
        if description.trim().is_empty() {
            return Vec::new();
        }

        let required = find_section(description, SectionKind::Required);
        let preferred = find_section(description, SectionKind::Preferred);
        let emphasis: Vec<(usize, usize)> = EMPHASIS_SPAN
            .find_iter(description)
            .map(|m| (m.start(), m.end()))
            .collect();
        let first_sentence_end = description
            .find(['.', '!', '?', '\n'])
            .map_or(description.len(), |idx| idx + 1);

        let mut seen: HashSet<String> = HashSet::new();
        let mut keywords = Vec::new();

        for compiled in &self.terms {
            let matches: Vec<regex::Match> = compiled.pattern.find_iter(description).collect();
            let Some(first) = matches.first() else {
                continue;
            };
            if !seen.insert(compiled.term.to_lowercase()) {
                continue;
            }

            let frequency = u32::try_from(matches.len()).unwrap_or(u32::MAX);
            let contexts = matches
                .iter()
                .take(MAX_CONTEXTS)
                .map(|m| snippet(description, m.start(), m.end()))
                .collect();
            let category = match compiled.kind {
                TermKind::Technical => {
                    technical_category(first.start(), required.as_ref(), preferred.as_ref())
                }
                TermKind::Tool => KeywordCategory::Tools,
                TermKind::SoftSkill => KeywordCategory::SoftSkill,
                TermKind::Value => KeywordCategory::Values,
                TermKind::Industry => KeywordCategory::Industry,
            };

            keywords.push(ExtractedKeyword {
                term: compiled.term.clone(),
                category,
                importance: importance_for(
                    description,
                    frequency,
                    first.start(),
                    first_sentence_end,
                    &emphasis,
                ),
                frequency,
                contexts,
                addressed: false,
            });
        }

        pattern_keywords(
            description,
            &EXPERIENCE_PATTERNS,
            KeywordCategory::Experience,
            KeywordImportance::High,
            &mut seen,
            &mut keywords,
        );
        pattern_keywords(
            description,
            &EDUCATION_PATTERNS,
            KeywordCategory::Education,
            KeywordImportance::Medium,
            &mut seen,
            &mut keywords,
        );

        keywords.sort_by(|a, b| {
            a.importance
                .cmp(&b.importance)
                .then(b.frequency.cmp(&a.frequency))
        });
        debug!(count = keywords.len(), "keyword extraction finished");
        keywords
    }
}

/// Builds the case-insensitive matcher for a dictionary term. Word
/// boundaries are only asserted on sides where the term itself starts or
/// ends with a word character, so terms like "C++" and ".NET" still match
/// whole tokens.
fn compile_term(term: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::with_capacity(term.len() + 8);
    if term.starts_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if term.ends_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Classification for a technical term based on where it first occurs.
/// A term outside both detected sections counts as required: postings
/// without explicit section headings list requirements in running text.
fn technical_category(
    first_match: usize,
    required: Option<&SectionSpan>,
    preferred: Option<&SectionSpan>,
) -> KeywordCategory {
    if required.is_some_and(|span| span.contains(first_match)) {
        KeywordCategory::RequiredSkill
    } else if preferred.is_some_and(|span| span.contains(first_match)) {
        KeywordCategory::PreferredSkill
    } else {
        KeywordCategory::RequiredSkill
    }
}

fn importance_for(
    text: &str,
    frequency: u32,
    first_match: usize,
    first_sentence_end: usize,
    emphasis: &[(usize, usize)],
) -> KeywordImportance {
    if frequency >= HIGH_FREQUENCY
        || first_match < first_sentence_end
        || near_required_phrase(text, first_match)
        || emphasis
            .iter()
            .any(|&(start, end)| first_match >= start && first_match < end)
    {
        KeywordImportance::High
    } else if frequency >= MEDIUM_FREQUENCY {
        KeywordImportance::Medium
    } else {
        KeywordImportance::Low
    }
}

fn near_required_phrase(text: &str, around: usize) -> bool {
    let start = back_by_chars(text, around, REQUIRED_PHRASE_WINDOW);
    let end = forward_by_chars(text, around, REQUIRED_PHRASE_WINDOW);
    REQUIRED_PHRASE.is_match(&text[start..end])
}

fn pattern_keywords(
    text: &str,
    patterns: &[Regex],
    category: KeywordCategory,
    importance: KeywordImportance,
    seen: &mut HashSet<String>,
    keywords: &mut Vec<ExtractedKeyword>,
) {
    for pattern in patterns {
        for found in pattern.find_iter(text) {
            let term = squash_whitespace(found.as_str());
            if term.chars().count() < MIN_PATTERN_TERM_LEN {
                continue;
            }
            if !seen.insert(term.to_lowercase()) {
                continue;
            }
            keywords.push(ExtractedKeyword {
                term,
                category,
                importance,
                frequency: 1,
                contexts: vec![snippet(text, found.start(), found.end())],
                addressed: false,
            });
        }
    }
}

/// Cuts a context snippet around a match, clipped to `CONTEXT_RADIUS`
/// characters per side with ellipses marking truncation.
fn snippet(text: &str, match_start: usize, match_end: usize) -> String {
    let start = back_by_chars(text, match_start, CONTEXT_RADIUS);
    let end = forward_by_chars(text, match_end, CONTEXT_RADIUS);
    let mut out = String::new();
    if start > 0 {
        out.push_str("...");
    }
    out.push_str(&squash_whitespace(&text[start..end]));
    if end < text.len() {
        out.push_str("...");
    }
    out
}

/// Steps back up to `count` characters from `offset`, landing on a char
/// boundary. `offset` must itself be a boundary.
fn back_by_chars(text: &str, offset: usize, count: usize) -> usize {
    text[..offset]
        .char_indices()
        .rev()
        .take(count)
        .last()
        .map_or(offset, |(idx, _)| idx)
}

/// Steps forward up to `count` characters from `offset`.
fn forward_by_chars(text: &str, offset: usize, count: usize) -> usize {
    text[offset..]
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(idx, _)| offset + idx)
}
