//! Board-specific extraction: ordered selector tables and the shared engine
//! that runs them.
//!
//! Each known job board contributes a [`FieldSelectors`] table; extraction
//! itself is one shared routine, so a board is just data. Per field, the
//! first selector with a non-empty match wins. A failed lookup affects only
//! that field.

use tracing::debug;

use crate::clean::{clean_block, clean_field, company_from_url, find_logo, strip_title_noise};
use crate::confidence::{self, ConfidenceFactors};
use crate::options::Options;
use crate::page::Page;
use crate::result::ExtractionResult;
use crate::salary;

/// Ordered selector lists for one job board.
pub struct FieldSelectors {
    pub title: &'static [&'static str],
    pub company: &'static [&'static str],
    pub location: &'static [&'static str],
    pub salary: &'static [&'static str],
    pub description: &'static [&'static str],
    pub logo: &'static [&'static str],
}

pub static LINKEDIN: FieldSelectors = FieldSelectors {
    title: &[
        ".top-card-layout__title",
        "h1.topcard__title",
        ".job-details-jobs-unified-top-card__job-title",
    ],
    company: &[
        ".topcard__org-name-link",
        ".job-details-jobs-unified-top-card__company-name",
        ".top-card-layout__second-subline a",
    ],
    location: &[
        ".topcard__flavor--bullet",
        ".job-details-jobs-unified-top-card__primary-description-container span",
        ".top-card-layout__second-subline .topcard__flavor",
    ],
    salary: &[".compensation__salary", ".salary"],
    description: &[
        ".show-more-less-html__markup",
        ".description__text",
        "#job-details",
    ],
    logo: &[
        ".top-card-layout__card img",
        ".topcard__org-logo img",
        "img.artdeco-entity-image",
    ],
};

pub static INDEED: FieldSelectors = FieldSelectors {
    title: &[
        "h1.jobsearch-JobInfoHeader-title",
        "[data-testid='jobsearch-JobInfoHeader-title']",
        "h1[data-testid='simpler-jobTitle']",
    ],
    company: &[
        "[data-testid='inlineHeader-companyName']",
        "[data-company-name='true']",
        ".jobsearch-CompanyInfoContainer a",
    ],
    location: &[
        "[data-testid='inlineHeader-companyLocation']",
        "[data-testid='job-location']",
        ".jobsearch-JobInfoHeader-subtitle div",
    ],
    salary: &[
        "#salaryInfoAndJobType",
        "[data-testid='attribute_snippet_testid']",
        ".jobsearch-JobMetadataHeader-item",
    ],
    description: &["#jobDescriptionText", ".jobsearch-jobDescriptionText"],
    logo: &[
        "img.jobsearch-JobInfoHeader-logo",
        ".jobsearch-JobInfoHeader-logo-container img",
    ],
};

pub static GLASSDOOR: FieldSelectors = FieldSelectors {
    title: &[
        "[data-test='job-title']",
        "h1[id^='jd-job-title']",
        "[class*='JobDetails_jobTitle']",
    ],
    company: &[
        "[data-test='employer-name']",
        "[class*='EmployerProfile_employerName']",
    ],
    location: &["[data-test='location']", "[data-test='emp-location']"],
    salary: &["[data-test='detailSalary']", "[class*='SalaryEstimate']"],
    description: &[
        "[class*='JobDetails_jobDescription']",
        "#JobDescriptionContainer",
        ".jobDescriptionContent",
    ],
    logo: &["[class*='EmployerLogo'] img", ".employer-logo img"],
};

pub static GREENHOUSE: FieldSelectors = FieldSelectors {
    title: &[".app-title", ".job__title h1", "h1.section-header"],
    company: &[".company-name", ".header-company-name"],
    location: &[".location", ".job__location div"],
    salary: &[".pay-range", ".salary"],
    description: &["#content", ".job__description", "#main"],
    logo: &["#logo img", ".image-link img", "img.logo"],
};

pub static LEVER: FieldSelectors = FieldSelectors {
    title: &[".posting-headline h2", ".posting-header h2"],
    company: &[],
    location: &[
        ".posting-categories .location",
        ".posting-category.location",
    ],
    salary: &[".salary-range", ".posting-categories .salary"],
    description: &[
        "[data-qa='job-description']",
        ".posting-page .section-wrapper",
        ".content .section",
    ],
    logo: &[".main-header-logo img", ".posting-header img"],
};

/// Runs the shared selector engine for one board.
///
/// Every field passes through the cleaners; company falls back to URL
/// inference when no selector matches; salary runs the scanner over the
/// board's targeted elements before the bounded full-page scan.
#[must_use]
pub fn extract(
    page: &Page,
    url: &str,
    selectors: &FieldSelectors,
    parser_name: &str,
    options: &Options,
) -> ExtractionResult {
    let mut result = ExtractionResult::new(url, parser_name);

    result.title = clean_field(page.first_text(selectors.title), options.max_title_len)
        .map(|title| strip_title_noise(&title))
        .filter(|title| !title.is_empty());
    result.company = clean_field(page.first_text(selectors.company), options.max_company_len)
        .or_else(|| company_from_url(url));
    result.location = clean_field(page.first_text(selectors.location), options.max_location_len);
    result.salary = clean_field(
        salary::find(page, selectors.salary, options.salary_scan_window),
        options.max_salary_len,
    );
    result.description = clean_block(
        page.first_text(selectors.description),
        options.max_description_len,
    );
    result.company_logo_url = find_logo(page, url, selectors.logo);
    result.confidence = confidence::score(&ConfidenceFactors::from(&result));

    debug!(
        parser = parser_name,
        confidence = result.confidence,
        "board extraction finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_selector_wins_per_field() {
        let page = Page::parse(
            r#"<body>
                <h1 class="topcard__title">Staff Engineer - job post</h1>
                <a class="topcard__org-name-link">Initech</a>
                <span class="topcard__flavor--bullet">Remote, US</span>
                <div class="show-more-less-html__markup">
                    Design and build distributed systems with a small platform team.
                </div>
            </body>"#,
        );
        let result = extract(
            &page,
            "https://www.linkedin.com/jobs/view/123",
            &LINKEDIN,
            "linkedin",
            &Options::default(),
        );

        assert_eq!(result.title, Some("Staff Engineer".to_string()));
        assert_eq!(result.company, Some("Initech".to_string()));
        assert_eq!(result.location, Some("Remote, US".to_string()));
        assert!(result
            .description
            .as_deref()
            .is_some_and(|d| d.contains("distributed systems")));
        assert_eq!(result.parser, "linkedin");
    }

    #[test]
    fn missing_fields_stay_none_never_empty() {
        let page = Page::parse("<body><p>nothing useful here</p></body>");
        let result = extract(
            &page,
            "https://example.org/x",
            &GLASSDOOR,
            "glassdoor",
            &Options::default(),
        );

        assert_eq!(result.title, None);
        assert_eq!(result.location, None);
        assert_eq!(result.salary, None);
        assert_eq!(result.description, None);
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn company_falls_back_to_url_inference() {
        let page = Page::parse(
            r#"<body><div class="posting-headline"><h2>Data Scientist</h2></div></body>"#,
        );
        let result = extract(
            &page,
            "https://jobs.lever.co/globex/abc-123",
            &LEVER,
            "lever",
            &Options::default(),
        );
        assert_eq!(result.company, Some("Globex".to_string()));
    }

    #[test]
    fn salary_prefers_targeted_element() {
        let page = Page::parse(
            r#"<body>
                <div id="salaryInfoAndJobType">$85,000 - $105,000 a year</div>
                <p>Our last round valued us at $50,000,000.</p>
            </body>"#,
        );
        let result = extract(
            &page,
            "https://www.indeed.com/viewjob?jk=abc",
            &INDEED,
            "indeed",
            &Options::default(),
        );
        assert_eq!(result.salary, Some("$85,000 - $105,000 a year".to_string()));
    }

    #[test]
    fn title_reduced_to_nothing_becomes_none() {
        let page = Page::parse(r#"<body><h1 class="app-title">- job post</h1></body>"#);
        let result = extract(
            &page,
            "https://boards.greenhouse.io/acme-corp/jobs/1",
            &GREENHOUSE,
            "greenhouse",
            &Options::default(),
        );
        assert_eq!(result.title, None);
        assert_eq!(result.company, Some("Acme Corp".to_string()));
    }
}
