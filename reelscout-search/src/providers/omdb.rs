//! Title search against the OMDb API.

use async_trait::async_trait;
use reelscout_core::{ConfigError, OmdbConfig, RuntimeMode};
use serde::Deserialize;
use url::Url;

use super::MovieSearchProvider;
use crate::errors::MovieSearchError;
use crate::types::{MovieSummary, SearchOutcome};

/// OMDb provider issuing `GET {base}?apikey=..&s=..` requests.
#[derive(Clone)]
pub struct OmdbProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl std::fmt::Debug for OmdbProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Response from the OMDb search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbSearchResponse {
    /// `"True"` on a match, `"False"` otherwise
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    /// Matching items, present on a match
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<MovieSummary>>,
    /// Explanation on a miss
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    /// Interprets the match indicator.
    ///
    /// A positive indicator without a `Search` array yields an empty result
    /// list. Anything other than `"True"` is a miss; an empty explanation is
    /// treated as absent.
    pub fn into_outcome(self) -> SearchOutcome {
        if self.response.as_deref() == Some("True") {
            SearchOutcome::Found(self.search.unwrap_or_default())
        } else {
            SearchOutcome::NotFound {
                message: self.error.filter(|e| !e.trim().is_empty()),
            }
        }
    }
}

impl OmdbProvider {
    /// Create an OMDb provider from configuration.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::Configuration` - Missing API key or unusable base URL
    /// - `MovieSearchError::NetworkError` - HTTP client could not be built
    pub fn new(config: &OmdbConfig) -> Result<Self, MovieSearchError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ConfigError::MissingApiKey {
                mode: RuntimeMode::Production,
            })?;
        let endpoint = config.endpoint()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| MovieSearchError::NetworkError {
            reason: format!("HTTP client setup failed: {e}"),
        })?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Full request URL for a title search.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("s", query);
        url
    }
}

#[async_trait]
impl MovieSearchProvider for OmdbProvider {
    fn name(&self) -> &'static str {
        "omdb"
    }

    async fn search(&self, query: &str) -> Result<SearchOutcome, MovieSearchError> {
        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| MovieSearchError::NetworkError {
                reason: format!("HTTP request failed: {e}"),
            })?;

        // OMDb reports bad keys and limits with a JSON body on 4xx, so the body
        // is decoded before the status is considered.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| MovieSearchError::NetworkError {
                reason: format!("Reading response body failed: {e}"),
            })?;

        match serde_json::from_slice::<OmdbSearchResponse>(&body) {
            Ok(payload) => {
                tracing::debug!(
                    %status,
                    response = payload.response.as_deref().unwrap_or("<missing>"),
                    "OMDb search answered"
                );
                Ok(payload.into_outcome())
            }
            Err(e) if status.is_success() => Err(MovieSearchError::ParseError {
                reason: format!("JSON parsing failed: {e}"),
            }),
            Err(_) => Err(MovieSearchError::ProviderError {
                reason: format!("OMDb returned HTTP {status}"),
            }),
        }
    }
}
