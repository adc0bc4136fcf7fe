use crate::config::types::{FetchConfig, ScoutConfig, UserAgentConfig};
use crate::{ConfigError, ConfigResult};

/// Upper bound on the worker pool size
const MAX_WORKERS: usize = 256;

impl ScoutConfig {
    /// Validates the entire configuration
    pub fn validate(&self) -> ConfigResult<()> {
        validate_workers(self.workers)?;
        validate_fetch_config(&self.fetch)?;
        validate_user_agent_config(&self.user_agent)?;
        Ok(())
    }
}

fn validate_workers(workers: usize) -> ConfigResult<()> {
    if workers < 1 || workers > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and {}, got {}",
            MAX_WORKERS, workers
        )));
    }
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> ConfigResult<()> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout must be at least 1 second".to_string(),
        ));
    }

    if config.politeness_delay_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "politeness delay must be <= 60000ms, got {}ms",
            config.politeness_delay_ms
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    // Name: non-empty, alphanumeric + hyphens only
    if config.name.is_empty() {
        return Err(ConfigError::InvalidUserAgent(
            "name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::InvalidUserAgent(format!(
            "name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::InvalidUserAgent(
            "version cannot be empty".to_string(),
        ));
    }

    Ok(())
}
