//! HTML parser for extracting page metadata, visible text and links
//!
//! This module handles parsing HTML content to extract:
//! - Page title and meta description
//! - Lowercase visible text for keyword scanning
//! - Outbound links paired with their anchor text

use crate::ScoutError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Elements whose text content is never rendered
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// An anchor resolved against the page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    /// Absolute URL, as resolved
    pub url: String,

    /// Anchor text, trimmed
    pub text: String,

    href_lower: String,
    text_lower: String,
}

impl ExtractedLink {
    pub fn new(url: String, text: &str) -> Self {
        let text = text.trim().to_string();
        Self {
            href_lower: url.to_lowercase(),
            text_lower: text.to_lowercase(),
            url,
            text,
        }
    }

    /// Returns true if the lowercase href or anchor text contains `needle`
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.href_lower.contains(needle) || self.text_lower.contains(needle)
    }

    /// Returns true if the link mentions any of the given lowercase needles
    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.mentions(needle))
    }
}

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// First non-empty `<title>`, trimmed; empty if absent
    pub title: String,

    /// `meta[name=description]`, else `meta[property=og:description]`; empty if absent
    pub meta_description: String,

    /// Visible text, whitespace-joined and lowercased
    pub text_lower: String,

    /// Anchors with an href, in document order
    pub links: Vec<ExtractedLink>,
}

/// Parses HTML content and extracts metadata, text and links
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The resolved page URL, used for relative links
///
/// # Returns
///
/// * `Ok(ParsedPage)` - Successfully parsed page
/// * `Err(ScoutError::HtmlParse)` - A selector could not be built
///
/// # Example
///
/// ```
/// use readiness_scout::crawler::parse_page;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_page(html, &base_url).unwrap();
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.links[0].url, "https://example.com/page");
/// ```
pub fn parse_page(html: &str, base_url: &Url) -> Result<ParsedPage, ScoutError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document, base_url)?;
    let meta_description = extract_meta_description(&document, base_url)?;
    let text_lower = visible_text_lower(&document);
    let links = extract_links(&document, base_url)?;

    Ok(ParsedPage {
        title,
        meta_description,
        text_lower,
        links,
    })
}

fn selector(css: &str, base_url: &Url) -> Result<Selector, ScoutError> {
    Selector::parse(css).map_err(|e| ScoutError::HtmlParse {
        url: base_url.to_string(),
        message: format!("invalid selector {:?}: {:?}", css, e),
    })
}

/// Extracts the first non-empty page title
fn extract_title(document: &Html, base_url: &Url) -> Result<String, ScoutError> {
    let title_selector = selector("title", base_url)?;

    Ok(document
        .select(&title_selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .find(|s| !s.is_empty())
        .unwrap_or_default())
}

/// Extracts the meta description, falling back to Open Graph
fn extract_meta_description(document: &Html, base_url: &Url) -> Result<String, ScoutError> {
    for css in [
        r#"meta[name="description"]"#,
        r#"meta[property="og:description"]"#,
    ] {
        let meta_selector = selector(css, base_url)?;
        if let Some(content) = document
            .select(&meta_selector)
            .find_map(|element| element.value().attr("content"))
        {
            return Ok(content.trim().to_string());
        }
    }

    Ok(String::new())
}

/// Collects visible text nodes, whitespace-joined and lowercased
fn visible_text_lower(document: &Html) -> String {
    let mut words: Vec<String> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map_or(false, |element| INVISIBLE_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        words.extend(text.split_whitespace().map(str::to_lowercase));
    }

    words.join(" ")
}

/// Extracts every anchor with an href that resolves against the base URL
fn extract_links(document: &Html, base_url: &Url) -> Result<Vec<ExtractedLink>, ScoutError> {
    let a_selector = selector("a[href]", base_url)?;

    Ok(document
        .select(&a_selector)
        .filter_map(|element| resolve_anchor(element, base_url))
        .collect())
}

fn resolve_anchor(element: ElementRef<'_>, base_url: &Url) -> Option<ExtractedLink> {
    let href = element.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    let text = element.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    Some(ExtractedLink::new(absolute.to_string(), &text))
}
