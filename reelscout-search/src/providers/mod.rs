//! Provider implementations for movie search functionality.

use async_trait::async_trait;

use crate::errors::MovieSearchError;
use crate::types::SearchOutcome;

pub mod demo;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod omdb;

pub use demo::DemoProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockProvider, MockReply};
pub use omdb::{OmdbProvider, OmdbSearchResponse};

/// Trait for movie search providers.
///
/// Implementations answer one title search through different backends
/// (the OMDb HTTP API, offline demo data, scripted mocks for testing).
#[async_trait]
pub trait MovieSearchProvider: Send + Sync + std::fmt::Debug {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Search for movies whose title matches `query`.
    ///
    /// A provider that answered, even negatively, returns `Ok`.
    ///
    /// # Errors
    /// - `MovieSearchError::NetworkError` - Transport failure
    /// - `MovieSearchError::ParseError` - Response body is not a search payload
    /// - `MovieSearchError::ProviderError` - Provider-specific failure
    async fn search(&self, query: &str) -> Result<SearchOutcome, MovieSearchError>;
}
