//! Structured-data extraction from schema.org `JobPosting` nodes.
//!
//! Split into two layers: [`parse_job_posting_node`] is a pure function over
//! one parsed JSON-LD node, and [`find_job_posting`] is a thin driver that
//! walks every block (top level plus one `@graph` level) and keeps the first
//! node that yields a title. Deeper nesting is intentionally not unwrapped.

use std::sync::LazyLock;

use dom_query::Document;
use regex::Regex;
use serde_json::Value;

use crate::clean::{squash_whitespace, tidy_block_text};

/// Tags that end a text block, replaced with newlines before flattening an
/// HTML description.
#[allow(clippy::expect_used)]
static BLOCK_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</p>|</li>|</div>|</h[1-6]>").expect("BLOCK_BREAKS regex")
});

/// Fields pulled from one `JobPosting` node.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JobPostingNode {
    pub title: Option<String>,
    pub company: Option<String>,
    pub company_logo_url: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
}

/// Walks all JSON-LD blocks and returns the first `JobPosting` node that
/// yields a title.
#[must_use]
pub fn find_job_posting(blocks: &[Value]) -> Option<JobPostingNode> {
    for block in blocks {
        for node in candidate_nodes(block) {
            if !is_job_posting(node) {
                continue;
            }
            let parsed = parse_job_posting_node(node);
            if parsed.title.is_some() {
                return Some(parsed);
            }
        }
    }
    None
}

/// Extracts posting fields from one parsed structured-data node.
///
/// Pure over the node value: no page access, no fallbacks. Field cleaning
/// beyond whitespace squashing is the caller's concern.
#[must_use]
pub fn parse_job_posting_node(node: &Value) -> JobPostingNode {
    let org = node.get("hiringOrganization");
    JobPostingNode {
        title: node
            .get("title")
            .or_else(|| node.get("name"))
            .and_then(Value::as_str)
            .map(squash_whitespace)
            .filter(|t| !t.is_empty()),
        company: org
            .and_then(loose_string)
            .map(squash_whitespace)
            .filter(|c| !c.is_empty()),
        company_logo_url: org.and_then(org_logo),
        location: location_text(node),
        salary: node.get("baseSalary").and_then(format_salary),
        description: node
            .get("description")
            .and_then(Value::as_str)
            .and_then(flatten_description),
    }
}

/// Candidate nodes in one block: the block itself, array elements, and one
/// level of `@graph` entries under each.
fn candidate_nodes(block: &Value) -> Vec<&Value> {
    let mut nodes = Vec::new();
    if let Value::Array(items) = block {
        for item in items {
            nodes.push(item);
            push_graph_entries(item, &mut nodes);
        }
    } else {
        nodes.push(block);
        push_graph_entries(block, &mut nodes);
    }
    nodes
}

fn push_graph_entries<'a>(node: &'a Value, out: &mut Vec<&'a Value>) {
    if let Some(graph) = node.get("@graph").and_then(Value::as_array) {
        out.extend(graph.iter());
    }
}

fn is_job_posting(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(kind)) => kind.eq_ignore_ascii_case("JobPosting"),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .any(|k| k.as_str().is_some_and(|k| k.eq_ignore_ascii_case("JobPosting"))),
        _ => false,
    }
}

/// A string value, or the `name` of an object value.
fn loose_string(value: &Value) -> Option<&str> {
    match value {
        Value::String(text) => Some(text),
        Value::Object(map) => map.get("name").and_then(Value::as_str),
        _ => None,
    }
}

/// Logo URL from a `hiringOrganization` node: plain string or `ImageObject`.
fn org_logo(org: &Value) -> Option<String> {
    let logo = org.get("logo")?;
    let url = match logo {
        Value::String(url) => Some(url.as_str()),
        Value::Object(map) => map.get("url").and_then(Value::as_str),
        _ => None,
    }?;
    let trimmed = url.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Location text: `TELECOMMUTE` postings report "Remote", otherwise the
/// `jobLocation` place/address is flattened.
fn location_text(node: &Value) -> Option<String> {
    let telecommute = node
        .get("jobLocationType")
        .and_then(Value::as_str)
        .is_some_and(|kind| kind.eq_ignore_ascii_case("TELECOMMUTE"));
    if telecommute {
        return Some("Remote".to_string());
    }
    place_text(node.get("jobLocation")?)
}

fn place_text(location: &Value) -> Option<String> {
    match location {
        Value::String(text) => {
            let squashed = squash_whitespace(text);
            (!squashed.is_empty()).then_some(squashed)
        }
        Value::Array(items) => items.iter().find_map(place_text),
        Value::Object(map) => match map.get("address") {
            Some(address) => address_text(address),
            None => map
                .get("name")
                .and_then(Value::as_str)
                .map(squash_whitespace)
                .filter(|n| !n.is_empty()),
        },
        _ => None,
    }
}

fn address_text(address: &Value) -> Option<String> {
    match address {
        Value::String(text) => {
            let squashed = squash_whitespace(text);
            (!squashed.is_empty()).then_some(squashed)
        }
        Value::Object(map) => {
            let parts: Vec<String> = ["addressLocality", "addressRegion", "addressCountry"]
                .iter()
                .filter_map(|key| map.get(*key))
                .filter_map(loose_string)
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

/// Formats a `baseSalary` value: plain strings pass through,
/// `MonetaryAmount` objects become "$90,000 - $120,000 per year" style text.
fn format_salary(base: &Value) -> Option<String> {
    if let Some(text) = base.as_str() {
        let squashed = squash_whitespace(text);
        return (!squashed.is_empty()).then_some(squashed);
    }
    let map = base.as_object()?;
    let prefix = map
        .get("currency")
        .and_then(Value::as_str)
        .map(currency_prefix)
        .unwrap_or_default();
    let value = map.get("value")?;

    let (amounts, unit) = match value {
        Value::Object(inner) => {
            let min = inner.get("minValue").and_then(format_amount);
            let max = inner.get("maxValue").and_then(format_amount);
            let single = inner.get("value").and_then(format_amount);
            let unit = inner.get("unitText").and_then(Value::as_str);
            let amounts = match (min, max) {
                (Some(min), Some(max)) => Some(format!("{prefix}{min} - {prefix}{max}")),
                _ => single.map(|amount| format!("{prefix}{amount}")),
            };
            (amounts, unit)
        }
        other => (format_amount(other).map(|amount| format!("{prefix}{amount}")), None),
    };

    let amounts = amounts?;
    match unit.map(str::to_ascii_lowercase) {
        Some(unit) if !unit.is_empty() => Some(format!("{amounts} per {unit}")),
        _ => Some(amounts),
    }
}

fn currency_prefix(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "\u{20ac}".to_string(),
        "GBP" => "\u{a3}".to_string(),
        "" => String::new(),
        other => format!("{other} "),
    }
}

fn format_amount(value: &Value) -> Option<String> {
    match value {
        Value::Number(num) => {
            let amount = num.as_f64()?;
            if amount <= 0.0 {
                return None;
            }
            Some(group_thousands(amount))
        }
        Value::String(text) => {
            let squashed = squash_whitespace(text);
            (!squashed.is_empty()).then_some(squashed)
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn group_thousands(amount: f64) -> String {
    let digits = (amount.round() as i64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Flattens an HTML description to plain text, keeping block boundaries as
/// newlines.
fn flatten_description(html: &str) -> Option<String> {
    let trimmed = html.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.contains('<') {
        let tidied = tidy_block_text(trimmed);
        return (!tidied.is_empty()).then_some(tidied);
    }
    let with_breaks = BLOCK_BREAKS.replace_all(trimmed, "\n");
    let doc = Document::from(with_breaks.to_string());
    let tidied = tidy_block_text(&doc.select("body").text());
    (!tidied.is_empty()).then_some(tidied)
}
