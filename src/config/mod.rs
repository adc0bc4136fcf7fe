//! Configuration module for Readiness-Scout
//!
//! There is no configuration file. A [`ScoutConfig`] is built from compiled
//! defaults and then overridden by command-line flags.
//!
//! # Example
//!
//! ```
//! use readiness_scout::config::ScoutConfig;
//!
//! let mut config = ScoutConfig::default();
//! config.workers = 4;
//! assert!(config.validate().is_ok());
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{FetchConfig, ScoutConfig, UserAgentConfig, DEFAULT_WORKERS};
