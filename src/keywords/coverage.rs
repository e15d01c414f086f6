//! Aggregates addressed/total counts over extracted keywords.

use std::collections::BTreeMap;

use crate::result::{CategoryCoverage, CoverageSummary, ExtractedKeyword, KeywordCategory};

/// Summarizes how many keywords the caller has marked addressed, overall
/// and per category. Every category appears in the breakdown, including
/// those with zero keywords, so consumers can render a stable list.
#[must_use]
pub fn compute_coverage(keywords: &[ExtractedKeyword]) -> CoverageSummary {
    let mut by_category: BTreeMap<KeywordCategory, CategoryCoverage> = KeywordCategory::ALL
        .iter()
        .map(|category| (*category, CategoryCoverage::default()))
        .collect();

    let mut addressed = 0;
    for keyword in keywords {
        let entry = by_category.entry(keyword.category).or_default();
        entry.total += 1;
        if keyword.addressed {
            entry.addressed += 1;
            addressed += 1;
        }
    }

    CoverageSummary {
        total: keywords.len(),
        addressed,
        percentage: percentage(addressed, keywords.len()),
        by_category,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(addressed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (addressed as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::KeywordImportance;

    fn keyword(category: KeywordCategory, addressed: bool) -> ExtractedKeyword {
        ExtractedKeyword {
            term: "x".to_string(),
            category,
            importance: KeywordImportance::Low,
            frequency: 1,
            contexts: Vec::new(),
            addressed,
        }
    }

    #[test]
    fn four_of_ten_is_forty_percent() {
        let mut keywords = Vec::new();
        for i in 0..10 {
            keywords.push(keyword(KeywordCategory::RequiredSkill, i < 4));
        }
        let summary = compute_coverage(&keywords);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.addressed, 4);
        assert_eq!(summary.percentage, 40);
    }

    #[test]
    fn empty_input_reports_zero() {
        let summary = compute_coverage(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.addressed, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.by_category.len(), KeywordCategory::ALL.len());
        assert!(summary
            .by_category
            .values()
            .all(|c| c.total == 0 && c.addressed == 0));
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let keywords = vec![
            keyword(KeywordCategory::Tools, true),
            keyword(KeywordCategory::Tools, false),
            keyword(KeywordCategory::Tools, false),
        ];
        assert_eq!(compute_coverage(&keywords).percentage, 33);

        let keywords = vec![
            keyword(KeywordCategory::Tools, true),
            keyword(KeywordCategory::Tools, true),
            keyword(KeywordCategory::Tools, false),
        ];
        assert_eq!(compute_coverage(&keywords).percentage, 67);
    }

    #[test]
    fn breakdown_tracks_each_category() {
        let keywords = vec![
            keyword(KeywordCategory::RequiredSkill, true),
            keyword(KeywordCategory::RequiredSkill, false),
            keyword(KeywordCategory::SoftSkill, true),
        ];
        let summary = compute_coverage(&keywords);
        assert_eq!(summary.by_category.len(), KeywordCategory::ALL.len());

        let required = &summary.by_category[&KeywordCategory::RequiredSkill];
        assert_eq!(required.total, 2);
        assert_eq!(required.addressed, 1);

        let soft = &summary.by_category[&KeywordCategory::SoftSkill];
        assert_eq!(soft.total, 1);
        assert_eq!(soft.addressed, 1);

        let education = &summary.by_category[&KeywordCategory::Education];
        assert_eq!(education.total, 0);
        assert_eq!(education.addressed, 0);
    }
}
