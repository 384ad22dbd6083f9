// ABOUTME: Configuration module for the big-deck application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::deck::FailurePolicy;
use log::warn;
use std::env;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub separator: String,
    pub failure_policy: FailurePolicy,
    pub title: String,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            failure_policy: FailurePolicy::Marker,
            title: "Presentation".to_string(),
            parallel: false,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let separator = lookup("BIG_DECK_SEPARATOR").unwrap_or(defaults.separator);
        let failure_policy = lookup("BIG_DECK_ON_ERROR")
            .and_then(|s| match s.parse::<FailurePolicy>() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    warn!("Ignoring BIG_DECK_ON_ERROR: {}", e);
                    None
                }
            })
            .unwrap_or(defaults.failure_policy);
        let title = lookup("BIG_DECK_TITLE").unwrap_or(defaults.title);
        let parallel = lookup("BIG_DECK_PARALLEL")
            .map(|s| s.to_lowercase() == "true")
            .unwrap_or(defaults.parallel);

        Self {
            separator,
            failure_policy,
            title,
            parallel,
        }
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(
        mut self,
        title: Option<String>,
        failure_policy: Option<FailurePolicy>,
        parallel: bool,
    ) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(policy) = failure_policy {
            self.failure_policy = policy;
        }
        self.parallel |= parallel;
        self
    }
}
