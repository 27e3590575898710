//! Error types for movie search functionality.

use reelscout_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while talking to a movie search provider.
///
/// None of these reach the user verbatim: a session collapses every variant
/// into the same fallback message and logs the detail.
#[derive(Debug, Error)]
pub enum MovieSearchError {
    /// Network communication error occurred during search.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to parse the provider's response body.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// Provider answered with something other than a search payload.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },

    /// Provider could not be built from the supplied configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}
