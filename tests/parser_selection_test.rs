use jobglean::parsers::{select_parser, SiteParser, REGISTRY};
use jobglean::Page;

#[test]
fn board_urls_select_their_parser() {
    let page = Page::parse("<html><body></body></html>");
    let cases = [
        ("https://www.linkedin.com/jobs/view/3894021", "linkedin"),
        ("https://www.indeed.com/viewjob?jk=abc123", "indeed"),
        ("https://www.glassdoor.com/job-listing/software-engineer", "glassdoor"),
        ("https://www.glassdoor.co.uk/job-listing/data-analyst", "glassdoor"),
        ("https://boards.greenhouse.io/acme/jobs/4001", "greenhouse"),
        ("https://jobs.lever.co/acme/0f61a2", "lever"),
        ("https://careers.example.com/openings/12", "generic"),
        ("not a url at all", "generic"),
    ];
    for (url, expected) in cases {
        assert_eq!(
            select_parser(url, &page).name(),
            expected,
            "wrong parser for {url}"
        );
    }
}

#[test]
fn selection_is_deterministic() {
    let page = Page::parse("<html><body><h1>Role</h1></body></html>");
    let url = "https://www.linkedin.com/jobs/view/99";
    let first = select_parser(url, &page);
    for _ in 0..5 {
        assert_eq!(select_parser(url, &page), first);
    }
}

#[test]
fn registry_ends_with_the_generic_fallback() {
    assert_eq!(REGISTRY.last(), Some(&SiteParser::Generic));
    // The fallback claims anything, so selection always resolves.
    assert!(SiteParser::Generic.detect("https://nowhere.example/"));
    assert!(SiteParser::Generic.detect(""));
}
