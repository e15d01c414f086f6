//! Confidence scoring: weighs field presence and length into one number.

use crate::result::ExtractionResult;

/// Borrowed view over the fields the scorer weighs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceFactors<'a> {
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub salary: Option<&'a str>,
}

impl<'a> From<&'a ExtractionResult> for ConfidenceFactors<'a> {
    fn from(result: &'a ExtractionResult) -> Self {
        Self {
            title: result.title.as_deref(),
            company: result.company.as_deref(),
            description: result.description.as_deref(),
            location: result.location.as_deref(),
            salary: result.salary.as_deref(),
        }
    }
}

const MAX_POINTS: f64 = 9.0;

/// Scores extraction factors into `[0.0, 1.0]`, rounded to 2 decimals.
///
/// Points: title 3 when longer than 3 chars (1 when shorter), company 2 when
/// longer than 1 char (1 otherwise), description 1 for more than 20 chars
/// plus 2 more for more than 100, location 1 when longer than 2 chars,
/// salary 1 when present. The sum is divided by 9 and clamped, so the score
/// is total and always in range.
#[must_use]
pub fn score(factors: &ConfidenceFactors<'_>) -> f64 {
    let mut points: u32 = 0;
    if let Some(title) = factors.title {
        if !title.is_empty() {
            points += if title.chars().count() > 3 { 3 } else { 1 };
        }
    }
    if let Some(company) = factors.company {
        if !company.is_empty() {
            points += if company.chars().count() > 1 { 2 } else { 1 };
        }
    }
    if let Some(description) = factors.description {
        let len = description.chars().count();
        if len > 20 {
            points += 1;
        }
        if len > 100 {
            points += 2;
        }
    }
    if let Some(location) = factors.location {
        if location.chars().count() > 2 {
            points += 1;
        }
    }
    if factors.salary.is_some() {
        points += 1;
    }
    round2((f64::from(points) / MAX_POINTS).clamp(0.0, 1.0))
}

/// Rounds to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
