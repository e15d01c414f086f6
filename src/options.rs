//! Configuration options for job-posting extraction.
//!
//! The `Options` struct bounds field lengths and scan windows. All fields are
//! public; use `Default::default()` for standard settings.

/// Configuration options for extraction behavior.
///
/// # Example
///
/// ```rust
/// use jobglean::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     salary_scan_window: 5_000,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum length of the extracted title (characters).
    ///
    /// Default: `200`
    pub max_title_len: usize,

    /// Maximum length of the extracted company name (characters).
    ///
    /// Default: `150`
    pub max_company_len: usize,

    /// Maximum length of the extracted location (characters).
    ///
    /// Default: `160`
    pub max_location_len: usize,

    /// Maximum length of the extracted salary text (characters).
    ///
    /// Default: `120`
    pub max_salary_len: usize,

    /// Maximum length of the extracted description (characters).
    ///
    /// Default: `20_000`
    pub max_description_len: usize,

    /// How many characters of full-page text the last-resort salary scan
    /// reads. Bounds the cost of the regex pass on very large pages.
    ///
    /// Default: `10_000`
    pub salary_scan_window: usize,

    /// Minimum length for a selector-matched description candidate.
    ///
    /// Shorter matches are treated as noise (empty containers, teaser
    /// snippets) and the next strategy is tried instead.
    ///
    /// Default: `100`
    pub min_description_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_title_len: 200,
            max_company_len: 150,
            max_location_len: 160,
            max_salary_len: 120,
            max_description_len: 20_000,
            salary_scan_window: 10_000,
            min_description_len: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let opts = Options::default();
        assert!(opts.max_title_len >= 100);
        assert!(opts.max_description_len > opts.max_title_len);
        assert!(opts.salary_scan_window > 0);
    }

    #[test]
    fn struct_update_syntax_works() {
        let opts = Options {
            max_title_len: 80,
            ..Options::default()
        };
        assert_eq!(opts.max_title_len, 80);
        assert_eq!(opts.max_company_len, Options::default().max_company_len);
    }
}
