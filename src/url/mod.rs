//! URL handling module for Readiness-Scout
//!
//! Turns the free-form `website` column into something the fetcher can request.

mod normalize;

pub use normalize::normalize_website;
