//! Keyword, technology and email detectors
//!
//! All detectors are pure functions over already-lowercased text or raw HTML.
//! They never allocate per keyword and never fail.

use crate::crawler::ExtractedLink;
use crate::signals::tables::{AI_KEYWORDS, PRICING_KEYWORD, TECH_SIGNATURES};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern is a valid regex")
});

/// Counts how many distinct AI keywords occur in `text_lower`
///
/// Each keyword counts at most once however often it repeats. Matching is a
/// plain substring test, so the caller must pass lowercase text.
///
/// # Example
///
/// ```
/// use readiness_scout::signals::count_ai_keywords;
///
/// assert_eq!(count_ai_keywords("machine learning, machine learning"), 1);
/// assert_eq!(count_ai_keywords("nothing relevant here"), 0);
/// ```
pub fn count_ai_keywords(text_lower: &str) -> usize {
    AI_KEYWORDS
        .iter()
        .filter(|keyword| text_lower.contains(*keyword))
        .count()
}

/// Detects technologies from the signature table in lowercase raw HTML
///
/// Returns an ordered set so serialisation is deterministic.
pub fn detect_technologies(html_lower: &str) -> BTreeSet<&'static str> {
    TECH_SIGNATURES
        .iter()
        .filter(|(_, signatures)| signatures.iter().any(|sig| html_lower.contains(sig)))
        .map(|(name, _)| *name)
        .collect()
}

/// Extracts the set of email addresses appearing anywhere in raw HTML
///
/// # Example
///
/// ```
/// use readiness_scout::signals::find_emails;
///
/// let emails = find_emails("a@b.com a@b.com");
/// assert_eq!(emails.len(), 1);
/// assert!(emails.contains("a@b.com"));
/// ```
pub fn find_emails(html: &str) -> BTreeSet<String> {
    EMAIL_PATTERN
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns true if any link's href or text mentions a pricing page
pub fn link_mentions_pricing(links: &[ExtractedLink]) -> bool {
    links.iter().any(|link| link.mentions(PRICING_KEYWORD))
}
