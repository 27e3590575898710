//! Movie search service: provider selection and session factory.

use std::sync::Arc;

use reelscout_core::{ReelscoutConfig, RuntimeMode};
use tracing::info;

use crate::errors::MovieSearchError;
use crate::providers::{DemoProvider, MovieSearchProvider, OmdbProvider};
use crate::session::{SearchSession, TriggerPolicy};

/// Shared handle to the configured search provider.
///
/// Cheap to clone; every clone and every session it creates talk to the same
/// provider instance.
#[derive(Debug, Clone)]
pub struct MovieSearchService {
    provider: Arc<dyn MovieSearchProvider>,
}

impl MovieSearchService {
    /// Creates the service for a runtime mode: OMDb in production, the demo
    /// catalogue in development.
    ///
    /// # Errors
    /// - `MovieSearchError::Configuration` - Production mode with missing key or bad URL
    /// - `MovieSearchError::NetworkError` - HTTP client could not be built
    pub fn from_runtime_mode(
        config: &ReelscoutConfig,
        mode: RuntimeMode,
    ) -> Result<Self, MovieSearchError> {
        let provider: Arc<dyn MovieSearchProvider> = match mode {
            RuntimeMode::Production => Arc::new(OmdbProvider::new(&config.omdb)?),
            RuntimeMode::Development => Arc::new(DemoProvider::new()),
        };
        info!(%mode, provider = provider.name(), "Movie search service ready");
        Ok(Self { provider })
    }

    /// Creates a service around an existing provider.
    pub fn with_provider(provider: Arc<dyn MovieSearchProvider>) -> Self {
        Self { provider }
    }

    /// Name of the provider answering searches, as reported by `/health`.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Opens a session with an empty query.
    pub fn session(&self, policy: TriggerPolicy) -> SearchSession {
        SearchSession::new(self.provider.clone(), policy)
    }

    /// Opens a session seeded with `initial_query`.
    pub fn session_with_query(&self, policy: TriggerPolicy, initial_query: &str) -> SearchSession {
        SearchSession::with_query(self.provider.clone(), policy, initial_query)
    }
}
