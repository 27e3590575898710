//! Reelscout Core - Configuration and process plumbing
//!
//! Shared by every Reelscout crate: layered configuration with environment
//! overrides, the runtime mode switch between the real OMDb service and
//! offline demo data, and tracing initialisation.

pub mod config;
pub mod mode;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{OmdbConfig, ReelscoutConfig, SearchConfig, WebConfig};
pub use mode::RuntimeMode;

/// Errors raised while assembling or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Production mode needs a credential for the movie database.
    #[error("OMDb API key is required in {mode} mode (set REELSCOUT_OMDB_API_KEY or --api-key)")]
    MissingApiKey {
        /// Mode that demanded the key
        mode: RuntimeMode,
    },

    /// Base URL for the movie database could not be parsed.
    #[error("Invalid OMDb base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value
        value: String,
        /// Parser failure description
        reason: String,
    },

    /// Web server bind settings are unusable.
    #[error("Invalid web configuration: {reason}")]
    InvalidWeb {
        /// Why the settings were rejected
        reason: String,
    },
}
