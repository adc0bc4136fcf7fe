use std::time::Duration;

/// Default number of in-flight lead pipelines
pub const DEFAULT_WORKERS: usize = 8;

/// Main configuration structure for Readiness-Scout
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// Maximum number of leads processed concurrently
    pub workers: usize,

    pub fetch: FetchConfig,

    pub user_agent: UserAgentConfig,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            fetch: FetchConfig::default(),
            user_agent: UserAgentConfig::default(),
        }
    }
}

/// HTTP fetch behaviour
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout (seconds)
    pub timeout_secs: u64,

    /// Pause after every successful fetch within one lead's pipeline (milliseconds)
    pub politeness_delay_ms: u64,

    /// Redirect hops followed before giving up
    pub max_redirects: usize,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            politeness_delay_ms: 500,
            max_redirects: 10,
        }
    }
}

/// User agent identification sent on every request
#[derive(Debug, Clone)]
pub struct UserAgentConfig {
    /// Name of the client
    pub name: String,

    /// Version of the client
    pub version: String,

    /// Free-form contact hint appended to the header
    pub contact: String,
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version (+contact)`
    pub fn header_value(&self) -> String {
        format!("{}/{} (+{})", self.name, self.version, self.contact)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "ReadinessScout".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact: "lead enrichment; homepage and careers pages only".to_string(),
        }
    }
}
