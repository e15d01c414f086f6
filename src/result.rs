//! Result types for job-posting extraction, keyword analysis, and coverage.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Structured record extracted from one job-posting page.
///
/// Every textual field is optional: `None` means the field was not found.
/// Fields are never `Some("")` — cleaners resolve empty matches to `None` so
/// the confidence scorer can distinguish "absent" from "found but empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Job title.
    pub title: Option<String>,
    /// Hiring company name.
    pub company: Option<String>,
    /// Absolute URL of the company logo, when one was discovered.
    pub company_logo_url: Option<String>,
    /// Location text ("Berlin", "Remote", "London, UK").
    pub location: Option<String>,
    /// Salary text as found on the page ("$90,000 - $120,000").
    pub salary: Option<String>,
    /// Cleaned description text.
    pub description: Option<String>,
    /// URL the page was fetched from.
    pub source_url: String,
    /// When this extraction ran.
    pub extracted_at: DateTime<Utc>,
    /// Name of the parser that produced this result.
    #[serde(rename = "sourceParserName")]
    pub parser: String,
    /// Reliability score in `[0.0, 1.0]`.
    pub confidence: f64,
}

impl ExtractionResult {
    /// Creates an empty result for the given source URL and parser name,
    /// stamped with the current time.
    #[must_use]
    pub fn new(source_url: &str, parser: &str) -> Self {
        Self {
            title: None,
            company: None,
            company_logo_url: None,
            location: None,
            salary: None,
            description: None,
            source_url: source_url.to_string(),
            extracted_at: Utc::now(),
            parser: parser.to_string(),
            confidence: 0.0,
        }
    }

    /// Coarse label for the confidence score, at thresholds 0.5 and 0.8.
    #[must_use]
    pub fn confidence_label(&self) -> ConfidenceLabel {
        ConfidenceLabel::from_score(self.confidence)
    }

    /// Serializes the result to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a result from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or does not match the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Coarse reliability label derived from a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl ConfidenceLabel {
    /// Maps a score to a label: `< 0.5` is low, `< 0.8` is medium,
    /// everything else is high.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 0.5 {
            Self::Low
        } else if score < 0.8 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Category assigned to an extracted keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    RequiredSkill,
    PreferredSkill,
    SoftSkill,
    Experience,
    Education,
    Values,
    Tools,
    Industry,
}

impl KeywordCategory {
    /// All categories in their stable reporting order.
    pub const ALL: [Self; 8] = [
        Self::RequiredSkill,
        Self::PreferredSkill,
        Self::SoftSkill,
        Self::Experience,
        Self::Education,
        Self::Values,
        Self::Tools,
        Self::Industry,
    ];
}

/// Importance ranking for an extracted keyword.
///
/// Ordered so that sorting ascending puts `High` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordImportance {
    High,
    Medium,
    Low,
}

/// One keyword found in a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedKeyword {
    /// The matched term, in dictionary casing.
    pub term: String,
    pub category: KeywordCategory,
    pub importance: KeywordImportance,
    /// Exact count of word-boundary matches in the description.
    pub frequency: u32,
    /// Up to 3 snippets of surrounding text, ellipsized when truncated.
    pub contexts: Vec<String>,
    /// Whether the user has marked this keyword as addressed in their
    /// application materials. Always `false` at creation; merged forward
    /// from prior runs by the caller.
    pub addressed: bool,
}

/// Serializes a keyword list to a JSON array, for callers that persist
/// keywords between runs.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn keywords_to_json(keywords: &[ExtractedKeyword]) -> Result<String> {
    Ok(serde_json::to_string(keywords)?)
}

/// Deserializes a keyword list from a JSON array.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or does not match the
/// expected shape.
pub fn keywords_from_json(json: &str) -> Result<Vec<ExtractedKeyword>> {
    Ok(serde_json::from_str(json)?)
}

/// A required/preferred qualifications block located in description text.
///
/// Offsets are byte positions into the description; `start` points just past
/// the section header, `end` at the start of the following section (or end of
/// text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SectionSpan {
    /// Whether `pos` falls inside this span.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// Addressed-vs-total counts for one keyword category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub total: usize,
    pub addressed: usize,
}

/// Aggregated coverage statistics over one keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub total: usize,
    pub addressed: usize,
    /// `round(100 * addressed / total)`, or 0 when `total` is 0.
    pub percentage: u32,
    /// Per-category counts. Every `KeywordCategory` is present, including
    /// categories with zero keywords.
    pub by_category: BTreeMap<KeywordCategory, CategoryCoverage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_has_no_fields_and_zero_confidence() {
        let result = ExtractionResult::new("https://example.com/jobs/1", "generic");
        assert!(result.title.is_none());
        assert!(result.company.is_none());
        assert!(result.description.is_none());
        assert_eq!(result.source_url, "https://example.com/jobs/1");
        assert_eq!(result.parser, "generic");
        assert!((result.confidence - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_labels_at_thresholds() {
        assert_eq!(ConfidenceLabel::from_score(0.0), ConfidenceLabel::Low);
        assert_eq!(ConfidenceLabel::from_score(0.49), ConfidenceLabel::Low);
        assert_eq!(ConfidenceLabel::from_score(0.5), ConfidenceLabel::Medium);
        assert_eq!(ConfidenceLabel::from_score(0.79), ConfidenceLabel::Medium);
        assert_eq!(ConfidenceLabel::from_score(0.8), ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::from_score(1.0), ConfidenceLabel::High);
    }

    #[test]
    fn importance_sorts_high_first() {
        let mut importances = vec![
            KeywordImportance::Low,
            KeywordImportance::High,
            KeywordImportance::Medium,
        ];
        importances.sort();
        assert_eq!(
            importances,
            vec![
                KeywordImportance::High,
                KeywordImportance::Medium,
                KeywordImportance::Low,
            ]
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = match serde_json::to_string(&KeywordCategory::RequiredSkill) {
            Ok(json) => json,
            Err(err) => panic!("serialization failed: {err}"),
        };
        assert_eq!(json, "\"required_skill\"");
    }

    #[test]
    fn result_json_round_trip() {
        let mut result = ExtractionResult::new("https://example.com/jobs/2", "linkedin");
        result.title = Some("Backend Engineer".to_string());
        result.confidence = 0.78;

        let json = match result.to_json() {
            Ok(json) => json,
            Err(err) => panic!("to_json failed: {err}"),
        };
        assert!(json.contains("\"sourceUrl\""));
        assert!(json.contains("\"sourceParserName\""));
        assert!(json.contains("\"extractedAt\""));

        let parsed = match ExtractionResult::from_json(&json) {
            Ok(parsed) => parsed,
            Err(err) => panic!("from_json failed: {err}"),
        };
        assert_eq!(parsed, result);
    }

    #[test]
    fn keyword_list_json_round_trip() {
        let keywords = vec![ExtractedKeyword {
            term: "Rust".to_string(),
            category: KeywordCategory::RequiredSkill,
            importance: KeywordImportance::High,
            frequency: 3,
            contexts: vec!["...experience with Rust in production...".to_string()],
            addressed: true,
        }];

        let json = match keywords_to_json(&keywords) {
            Ok(json) => json,
            Err(err) => panic!("keywords_to_json failed: {err}"),
        };
        let parsed = match keywords_from_json(&json) {
            Ok(parsed) => parsed,
            Err(err) => panic!("keywords_from_json failed: {err}"),
        };
        assert_eq!(parsed, keywords);

        assert!(keywords_from_json("[{\"term\": 7}]").is_err());
    }

    #[test]
    fn section_span_contains_is_half_open() {
        let span = SectionSpan { start: 10, end: 20 };
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
        assert!(!span.contains(9));
    }
}
