//! Mock provider implementation for testing.
//!
//! Replies are scripted per query. A query can be held behind a gate so tests
//! can interleave overlapping searches deterministically.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use super::MovieSearchProvider;
use crate::errors::MovieSearchError;
use crate::types::{MovieSummary, SearchOutcome};

/// Scripted answer for one query.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Positive match with these movies
    Found(Vec<MovieSummary>),
    /// Negative match with an optional explanation
    NotFound(Option<String>),
    /// Transport failure
    Fail(String),
}

/// Mock provider for testing.
#[derive(Debug)]
pub struct MockProvider {
    replies: Mutex<HashMap<String, MockReply>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    fallback: MockReply,
    calls: Mutex<Vec<String>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Creates a mock that answers every unscripted query with an empty match.
    pub fn new() -> Self {
        Self::with_fallback(MockReply::Found(Vec::new()))
    }

    /// Creates a mock with a custom reply for unscripted queries.
    pub fn with_fallback(fallback: MockReply) -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Scripts the reply for `query`.
    pub fn on(&self, query: &str, reply: MockReply) -> &Self {
        self.replies.lock().insert(query.to_string(), reply);
        self
    }

    /// Holds searches for `query` until the returned handle is notified.
    pub fn hold(&self, query: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().insert(query.to_string(), gate.clone());
        gate
    }

    /// Number of searches issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Queries in the order they were issued.
    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

/// Builds a movie with a predictable id for test fixtures.
pub fn movie(index: usize, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: format!("tt{index:07}"),
        title: title.to_string(),
        year: format!("{}", 1990 + index % 30),
        poster: if index % 2 == 0 {
            crate::types::NO_POSTER_SENTINEL.to_string()
        } else {
            format!("https://img.example/{index}.jpg")
        },
    }
}

#[async_trait]
impl MovieSearchProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search(&self, query: &str) -> Result<SearchOutcome, MovieSearchError> {
        self.calls.lock().push(query.to_string());

        let gate = self.gates.lock().get(query).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let reply = self
            .replies
            .lock()
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            MockReply::Found(movies) => Ok(SearchOutcome::Found(movies)),
            MockReply::NotFound(message) => Ok(SearchOutcome::NotFound { message }),
            MockReply::Fail(reason) => Err(MovieSearchError::NetworkError { reason }),
        }
    }
}
