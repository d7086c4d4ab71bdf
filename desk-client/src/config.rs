//! Client configuration

use crate::{ClientError, ClientResult};

/// Default API root of a local installation
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the persistence API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root (e.g., "http://localhost:5000/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `DESK_API_URL`, `DESK_API_TOKEN` and `DESK_TIMEOUT_SECS`.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::new(get("DESK_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()));
        if let Some(token) = get("DESK_API_TOKEN") {
            config = config.with_token(token);
        }
        if let Some(raw) = get("DESK_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("DESK_TIMEOUT_SECS must be a number, got {raw:?}"))
            })?;
            config = config.with_timeout(secs);
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "API URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be at least 1 second".into()));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
