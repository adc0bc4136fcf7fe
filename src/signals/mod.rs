//! Signal detection and scoring
//!
//! This module contains:
//! - The fixed keyword and technology signature tables
//! - Detectors that run those tables over page text and raw HTML
//! - The [`SignalBundle`] handed to the scorer, and the scorer itself

mod extract;
mod score;
mod tables;

pub use extract::{count_ai_keywords, detect_technologies, find_emails, link_mentions_pricing};
pub use score::{score, SignalBundle, MAX_SCORE};
pub use tables::{AI_KEYWORDS, JOB_LINK_KEYWORDS, MODERN_STACK, TECH_SIGNATURES};
