use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.statuspage.io/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared settings for a [`StatuspageClient`](crate::StatuspageClient).
///
/// Built once and handed to the client; never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    /// Base URL every relative API path is resolved against. Must end in `/`.
    pub api_url: String,
    /// API key sent as `Authorization: OAuth <key>`.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("statuspage-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("STATUSPAGE_API_KEY").context("STATUSPAGE_API_KEY must be set")?;
        let mut config = Self::new(api_key);

        if let Some(api_url) = lookup("STATUSPAGE_API_URL") {
            config.api_url = api_url;
        }

        if let Some(secs) = lookup("STATUSPAGE_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("STATUSPAGE_TIMEOUT_SECS is not a number: {secs}"))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
