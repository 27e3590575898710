//! Centralized configuration for Reelscout.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase. Credentials are
//! never compiled in; they arrive through the environment or CLI flags.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use url::Url;

use crate::{ConfigError, RuntimeMode};

/// Public OMDb endpoint used when no override is configured.
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// Query the auto-trigger page searches for when it first mounts.
pub const DEFAULT_QUERY: &str = "avatar";

/// Central configuration for all Reelscout components.
#[derive(Debug, Clone, Default)]
pub struct ReelscoutConfig {
    pub omdb: OmdbConfig,
    pub web: WebConfig,
    pub search: SearchConfig,
}

/// Movie database client configuration.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Credential sent as the `apikey` query parameter
    pub api_key: Option<String>,
    /// Endpoint receiving search requests
    pub base_url: String,
    /// Per-request timeout (None = wait for the transport)
    pub request_timeout: Option<Duration>,
    /// User agent for outbound requests
    pub user_agent: &'static str,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            request_timeout: None,
            user_agent: "reelscout/0.1.0",
        }
    }
}

impl OmdbConfig {
    /// Parses the configured base URL.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidBaseUrl` - If the value is not an absolute http(s) URL
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            value: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Upper bound on live browser sessions kept in memory
    pub max_sessions: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_sessions: 256,
        }
    }
}

impl WebConfig {
    /// Resolves host and port into a socket address.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidWeb` - If the host is not an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidWeb {
            reason: format!("host '{}' is not an IP address", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Search behaviour configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Query searched on mount by the auto-trigger page
    pub default_query: String,
    /// Input delay hint handed to the browser before an auto search fires
    pub auto_debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_query: DEFAULT_QUERY.to_string(),
            auto_debounce_ms: 300,
        }
    }
}

impl ReelscoutConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup.
    ///
    /// Same rules as [`ReelscoutConfig::from_env`], without touching process state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(key) = lookup("REELSCOUT_OMDB_API_KEY").filter(|k| !k.trim().is_empty()) {
            config.omdb.api_key = Some(key);
        }

        if let Some(base_url) = lookup("REELSCOUT_OMDB_BASE_URL") {
            config.omdb.base_url = base_url;
        }

        if let Some(seconds) =
            lookup("REELSCOUT_OMDB_TIMEOUT").and_then(|t| t.parse::<u64>().ok())
        {
            config.omdb.request_timeout = Some(Duration::from_secs(seconds));
        }

        if let Some(host) = lookup("REELSCOUT_HOST") {
            config.web.host = host;
        }

        if let Some(port) = lookup("REELSCOUT_PORT").and_then(|p| p.parse::<u16>().ok()) {
            config.web.port = port;
        }

        if let Some(max) = lookup("REELSCOUT_MAX_SESSIONS")
            .and_then(|m| m.parse::<usize>().ok())
            .filter(|&m| m > 0)
        {
            config.web.max_sessions = max;
        }

        if let Some(query) = lookup("REELSCOUT_DEFAULT_QUERY") {
            config.search.default_query = query;
        }

        config
    }

    /// Creates a configuration suitable for tests: fixed key, loopback, small registry.
    pub fn for_testing() -> Self {
        Self {
            omdb: OmdbConfig {
                api_key: Some("test-key".to_string()),
                ..Default::default()
            },
            web: WebConfig {
                port: 0,
                max_sessions: 8,
                ..Default::default()
            },
            search: SearchConfig::default(),
        }
    }

    /// Checks the configuration against the chosen runtime mode.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingApiKey` - Production mode without an API key
    /// - `ConfigError::InvalidBaseUrl` - Base URL cannot be parsed
    /// - `ConfigError::InvalidWeb` - Host is not an IP address
    pub fn validate(&self, mode: RuntimeMode) -> Result<(), ConfigError> {
        self.validate_search(mode)?;
        self.web.socket_addr()?;
        Ok(())
    }

    /// Checks only what a search needs, for callers that never bind a socket.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingApiKey` - Production mode without an API key
    /// - `ConfigError::InvalidBaseUrl` - Base URL cannot be parsed
    pub fn validate_search(&self, mode: RuntimeMode) -> Result<(), ConfigError> {
        if mode.is_production() && self.omdb.api_key.is_none() {
            return Err(ConfigError::MissingApiKey { mode });
        }
        self.omdb.endpoint()?;
        Ok(())
    }
}
