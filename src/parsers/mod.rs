//! Site parsers and the ordered registry that selects one per URL.
//!
//! Parsers are a closed enum sharing one contract (`name`, `domains`,
//! `detect`, `extract`); the registry is a flat ordered list with the
//! generic fallback last, so selection is total by construction.

pub mod boards;
pub mod generic;
pub mod structured;

use tracing::debug;
use url::Url;

use crate::options::Options;
use crate::page::Page;
use crate::result::ExtractionResult;

/// The closed set of site parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteParser {
    Linkedin,
    Indeed,
    Glassdoor,
    Greenhouse,
    Lever,
    Generic,
}

/// Fixed parser order walked by [`select_parser`]: most specific boards
/// first, [`SiteParser::Generic`] last.
pub const REGISTRY: [SiteParser; 6] = [
    SiteParser::Linkedin,
    SiteParser::Indeed,
    SiteParser::Glassdoor,
    SiteParser::Greenhouse,
    SiteParser::Lever,
    SiteParser::Generic,
];

impl SiteParser {
    /// Stable identifier recorded in results.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Indeed => "indeed",
            Self::Glassdoor => "glassdoor",
            Self::Greenhouse => "greenhouse",
            Self::Lever => "lever",
            Self::Generic => "generic",
        }
    }

    /// Hostname fragments this parser is bound to.
    #[must_use]
    pub fn domains(self) -> &'static [&'static str] {
        match self {
            Self::Linkedin => &["linkedin.com"],
            Self::Indeed => &["indeed.com"],
            Self::Glassdoor => &["glassdoor."],
            Self::Greenhouse => &["greenhouse.io"],
            Self::Lever => &["lever.co"],
            Self::Generic => &[],
        }
    }

    /// URL-only detection predicate; cheap and side-effect-free.
    /// [`SiteParser::Generic`] always matches.
    #[must_use]
    pub fn detect(self, url: &str) -> bool {
        if self == Self::Generic {
            return true;
        }
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        if !self.domains().iter().any(|domain| host.contains(domain)) {
            return false;
        }
        match self {
            // linkedin.com hosts plenty of non-job pages
            Self::Linkedin => parsed.path().contains("/jobs"),
            _ => true,
        }
    }

    /// Runs this parser's extraction strategy on the page.
    #[must_use]
    pub fn extract(self, page: &Page, url: &str, options: &Options) -> ExtractionResult {
        match self {
            Self::Linkedin => boards::extract(page, url, &boards::LINKEDIN, self.name(), options),
            Self::Indeed => boards::extract(page, url, &boards::INDEED, self.name(), options),
            Self::Glassdoor => boards::extract(page, url, &boards::GLASSDOOR, self.name(), options),
            Self::Greenhouse => {
                boards::extract(page, url, &boards::GREENHOUSE, self.name(), options)
            }
            Self::Lever => boards::extract(page, url, &boards::LEVER, self.name(), options),
            Self::Generic => generic::extract(page, url, options),
        }
    }
}

/// Selects the first registry parser whose detector matches the URL.
///
/// Never fails to return a parser. The page is part of the contract for
/// content-based detectors, but every current detector is URL-only.
#[must_use]
pub fn select_parser(url: &str, _page: &Page) -> SiteParser {
    for parser in REGISTRY {
        if parser.detect(url) {
            debug!(parser = parser.name(), url, "parser selected");
            return parser;
        }
    }
    SiteParser::Generic
}
