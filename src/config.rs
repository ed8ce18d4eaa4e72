//! Breach lookup configuration
//!
//! Defaults target the public Pwned Passwords range API and can be
//! overridden through environment variables.

use thiserror::Error;

pub const API_URL_ENV: &str = "PWD_BREACH_API_URL";
pub const USER_AGENT_ENV: &str = "PWD_BREACH_USER_AGENT";
pub const PADDING_ENV: &str = "PWD_BREACH_PADDING";

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is set but empty")]
    EmptyValue(&'static str),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings for the remote range lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    /// Base URL; the 5-character hash prefix is appended as a path segment.
    pub api_url: String,
    pub user_agent: String,
    /// Ask the service to pad responses with zero-count decoy records.
    pub add_padding: bool,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
            add_padding: false,
        }
    }
}

impl BreachConfig {
    /// Builds the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_BREACH_API_URL`: range endpoint (default: Pwned Passwords)
    /// - `PWD_BREACH_USER_AGENT`: user agent sent with each lookup
    /// - `PWD_BREACH_PADDING`: `true`/`false`/`1`/`0` (default: `false`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but empty, or if the padding flag
    /// is not a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            api_url: read_var(API_URL_ENV)?.unwrap_or(defaults.api_url),
            user_agent: read_var(USER_AGENT_ENV)?.unwrap_or(defaults.user_agent),
            add_padding: match read_var(PADDING_ENV)? {
                Some(value) => parse_bool(PADDING_ENV, &value)?,
                None => defaults.add_padding,
            },
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// Full lookup URL for a hash prefix.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), prefix)
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn read_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(key)),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(_) => Ok(None),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
