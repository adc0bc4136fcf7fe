//! Readiness scoring
//!
//! | Condition | Points |
//! |-----------|--------|
//! | Homepage HTML retrieved | +10 |
//! | AI keyword count × 6 | up to +30 |
//! | Any modern-stack technology | +15 |
//! | Careers link present | +20 |
//! | Careers page mentions AI (requires careers link) | +5 |
//! | Pricing link present | +10 |
//! | At least one contact email | +5 |
//!
//! The sum is clamped to [`MAX_SCORE`].

use crate::signals::tables::MODERN_STACK;
use std::collections::BTreeSet;

/// Upper bound of the readiness score
pub const MAX_SCORE: u8 = 100;

const HOMEPAGE_POINTS: u32 = 10;
const KEYWORD_POINTS_EACH: u32 = 6;
const KEYWORD_POINTS_CAP: u32 = 30;
const MODERN_STACK_POINTS: u32 = 15;
const JOBS_POINTS: u32 = 20;
const JOBS_AI_POINTS: u32 = 5;
const PRICING_POINTS: u32 = 10;
const EMAIL_POINTS: u32 = 5;

/// Everything the scorer looks at for one lead
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalBundle {
    /// Homepage HTML was retrieved at all
    pub homepage_fetched: bool,

    /// Distinct AI keywords found in the homepage's visible text
    pub ai_keyword_count: usize,

    /// Technologies detected from the homepage's raw HTML
    pub tech_stack: BTreeSet<&'static str>,

    /// Email addresses found in the homepage's raw HTML
    pub emails: BTreeSet<String>,

    pub has_jobs: bool,

    pub jobs_ai_mentions: bool,

    pub has_pricing: bool,
}

impl SignalBundle {
    /// Returns true if any detected technology is in the modern-stack set
    pub fn has_modern_stack(&self) -> bool {
        self.tech_stack.iter().any(|tech| MODERN_STACK.contains(tech))
    }
}

/// Computes the 0-100 readiness score of a signal bundle
///
/// Absent signals contribute nothing; there are no penalties.
///
/// # Example
///
/// ```
/// use readiness_scout::signals::{score, SignalBundle};
///
/// let bundle = SignalBundle {
///     homepage_fetched: true,
///     ai_keyword_count: 1,
///     emails: ["hi@acme.test".to_string()].into_iter().collect(),
///     ..Default::default()
/// };
/// assert_eq!(score(&bundle), 21);
/// ```
pub fn score(bundle: &SignalBundle) -> u8 {
    let mut points: u32 = 0;

    if bundle.homepage_fetched {
        points += HOMEPAGE_POINTS;
    }

    let keyword_hits = u32::try_from(bundle.ai_keyword_count).unwrap_or(u32::MAX);
    points += keyword_hits
        .saturating_mul(KEYWORD_POINTS_EACH)
        .min(KEYWORD_POINTS_CAP);

    if bundle.has_modern_stack() {
        points += MODERN_STACK_POINTS;
    }

    if bundle.has_jobs {
        points += JOBS_POINTS;
        if bundle.jobs_ai_mentions {
            points += JOBS_AI_POINTS;
        }
    }

    if bundle.has_pricing {
        points += PRICING_POINTS;
    }

    if !bundle.emails.is_empty() {
        points += EMAIL_POINTS;
    }

    points.min(u32::from(MAX_SCORE)) as u8
}
