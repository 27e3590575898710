//! Search session: query, UI state and the trigger cycle.
//!
//! A session owns the state one page renders from. Triggers are sequenced by
//! a generation counter: only the most recent trigger may write results, so a
//! slow earlier response can never overwrite a newer one.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::providers::MovieSearchProvider;
use crate::types::{FAILED_TO_FETCH, NO_MOVIES_FOUND, SearchOutcome, UiState};
use crate::view::MainView;

/// When a session issues searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerPolicy {
    /// Every query change searches, plus once on start.
    #[default]
    Auto,
    /// Only an explicit submit searches.
    Manual,
}

impl std::fmt::Display for TriggerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

impl std::str::FromStr for TriggerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            _ => Err(format!(
                "Invalid trigger policy: '{s}'. Valid options are: auto, manual"
            )),
        }
    }
}

#[derive(Debug, Default)]
struct SessionInner {
    query: String,
    state: UiState,
    generation: u64,
    started: bool,
}

/// Outcome of the locked half of a trigger.
enum Cycle {
    /// Nothing to fetch; the state is final.
    Done(UiState),
    /// A request must be issued under this generation.
    Pending { query: String, generation: u64 },
}

/// One user's search session.
#[derive(Debug)]
pub struct SearchSession {
    provider: Arc<dyn MovieSearchProvider>,
    policy: TriggerPolicy,
    inner: Mutex<SessionInner>,
}

impl SearchSession {
    /// Creates a session with an empty query.
    pub fn new(provider: Arc<dyn MovieSearchProvider>, policy: TriggerPolicy) -> Self {
        Self::with_query(provider, policy, "")
    }

    /// Creates a session seeded with `initial_query`. Nothing is searched until
    /// [`SearchSession::start`], [`SearchSession::set_query`] or a trigger.
    pub fn with_query(
        provider: Arc<dyn MovieSearchProvider>,
        policy: TriggerPolicy,
        initial_query: &str,
    ) -> Self {
        Self {
            provider,
            policy,
            inner: Mutex::new(SessionInner {
                query: initial_query.to_string(),
                ..Default::default()
            }),
        }
    }

    /// Trigger policy fixed at creation.
    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }

    /// Current search box value.
    pub fn query(&self) -> String {
        self.inner.lock().query.clone()
    }

    /// Copy of the current UI state.
    pub fn snapshot(&self) -> UiState {
        self.inner.lock().state.clone()
    }

    /// Applies `f` to the view the rendering layer should show right now.
    pub fn with_view<R>(&self, f: impl FnOnce(MainView<'_>) -> R) -> R {
        let inner = self.inner.lock();
        f(MainView::from_state(&inner.state, self.policy))
    }

    /// Mounts the session. The auto policy searches once with the current
    /// query; later calls and the manual policy only return the state.
    pub async fn start(&self) -> UiState {
        let cycle = {
            let mut inner = self.inner.lock();
            let first = !inner.started;
            inner.started = true;
            if !first || self.policy == TriggerPolicy::Manual {
                return inner.state.clone();
            }
            let query = inner.query.clone();
            Self::begin(&mut inner, query)
        };
        self.run(cycle).await
    }

    /// Stores a new query. Under the auto policy a changed value triggers a
    /// search; an unchanged value or the manual policy does not.
    ///
    /// The query is stored and the search generation taken under one lock, so
    /// concurrent edits always leave results belonging to the stored query.
    pub async fn set_query(&self, query: &str) -> UiState {
        let cycle = {
            let mut inner = self.inner.lock();
            let changed = inner.query != query;
            inner.query = query.to_string();
            // A query typed before mount counts as the mount search.
            inner.started = true;
            if !changed || self.policy == TriggerPolicy::Manual {
                return inner.state.clone();
            }
            Self::begin(&mut inner, query.to_string())
        };
        self.run(cycle).await
    }

    /// Explicit search with the stored query.
    pub async fn submit(&self) -> UiState {
        let cycle = {
            let mut inner = self.inner.lock();
            let query = inner.query.clone();
            Self::begin(&mut inner, query)
        };
        self.run(cycle).await
    }

    /// Runs one search cycle for `query` and returns the resulting state.
    ///
    /// An empty query clears results without contacting the provider. Every
    /// other outcome, including a provider failure or this future being
    /// dropped, leaves `is_loading` false once the cycle ends.
    pub async fn trigger(&self, query: &str) -> UiState {
        let cycle = Self::begin(&mut self.inner.lock(), query.to_string());
        self.run(cycle).await
    }

    /// Takes a new generation and applies the synchronous half of a trigger.
    fn begin(inner: &mut SessionInner, query: String) -> Cycle {
        inner.generation += 1;

        if query.is_empty() {
            inner.state.results.clear();
            // Supersedes any in-flight request, which will no longer clear the flag.
            inner.state.is_loading = false;
            debug!(generation = inner.generation, "Empty query, results cleared");
            return Cycle::Done(inner.state.clone());
        }

        inner.state.is_loading = true;
        inner.state.error = None;
        inner.state.has_searched = true;
        Cycle::Pending {
            query,
            generation: inner.generation,
        }
    }

    async fn run(&self, cycle: Cycle) -> UiState {
        let (query, generation) = match cycle {
            Cycle::Done(state) => return state,
            Cycle::Pending { query, generation } => (query, generation),
        };

        debug!(
            provider = self.provider.name(),
            %query, generation, "Search triggered"
        );

        let guard = LoadingGuard {
            session: self,
            generation,
            finished: false,
        };
        let outcome = self.provider.search(&query).await;
        guard.finish(outcome)
    }

    fn is_current(inner: &SessionInner, generation: u64) -> bool {
        inner.generation == generation
    }
}

/// Clears `is_loading` for its generation however the trigger future ends.
struct LoadingGuard<'a> {
    session: &'a SearchSession,
    generation: u64,
    finished: bool,
}

impl LoadingGuard<'_> {
    fn finish(
        mut self,
        outcome: Result<SearchOutcome, crate::MovieSearchError>,
    ) -> UiState {
        self.finished = true;
        let mut inner = self.session.inner.lock();

        if !SearchSession::is_current(&inner, self.generation) {
            debug!(
                generation = self.generation,
                latest = inner.generation,
                "Discarding stale search response"
            );
            return inner.state.clone();
        }

        let state = &mut inner.state;
        match outcome {
            Ok(SearchOutcome::Found(movies)) => {
                debug!(count = movies.len(), "Search matched");
                state.results = movies;
                state.error = None;
            }
            Ok(SearchOutcome::NotFound { message }) => {
                debug!(?message, "Search found nothing");
                state.results.clear();
                state.error = Some(message.unwrap_or_else(|| NO_MOVIES_FOUND.to_string()));
            }
            Err(e) => {
                warn!(provider = self.session.provider.name(), error = %e, "Search failed");
                state.results.clear();
                state.error = Some(FAILED_TO_FETCH.to_string());
            }
        }
        state.is_loading = false;
        inner.state.clone()
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut inner = self.session.inner.lock();
        if SearchSession::is_current(&inner, self.generation) {
            debug!(generation = self.generation, "Search abandoned before completion");
            inner.state.is_loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;
    use crate::providers::mock::movie;
    use crate::providers::{MockProvider, MockReply};

    fn session(mock: &Arc<MockProvider>, policy: TriggerPolicy) -> SearchSession {
        SearchSession::new(mock.clone(), policy)
    }

    #[tokio::test]
    async fn test_empty_query_issues_no_request() {
        let mock = Arc::new(MockProvider::new());
        let session = session(&mock, TriggerPolicy::Auto);

        let state = session.trigger("").await;

        assert!(state.results.is_empty());
        assert!(state.error.is_none());
        assert!(!state.is_loading);
        assert!(!state.has_searched);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_query_clears_previous_results() {
        let mock = Arc::new(MockProvider::new());
        mock.on("alien", MockReply::Found(vec![movie(1, "Alien")]));
        let session = session(&mock, TriggerPolicy::Auto);

        assert_eq!(session.trigger("alien").await.results.len(), 1);
        let state = session.trigger("").await;

        assert!(state.results.is_empty());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_found_results_replace_state_in_order() {
        let mock = Arc::new(MockProvider::new());
        let movies = vec![movie(3, "Heat"), movie(1, "Alien"), movie(2, "Aliens")];
        mock.on("a", MockReply::Found(movies.clone()));
        let session = session(&mock, TriggerPolicy::Auto);

        let state = session.trigger("a").await;

        assert_eq!(state.results, movies);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
        assert!(state.has_searched);
    }

    #[tokio::test]
    async fn test_not_found_uses_message_or_fallback() {
        let mock = Arc::new(MockProvider::new());
        mock.on("x", MockReply::NotFound(Some("Movie not found!".to_string())));
        mock.on("y", MockReply::NotFound(None));
        let session = session(&mock, TriggerPolicy::Auto);

        let state = session.trigger("x").await;
        assert_eq!(state.error.as_deref(), Some("Movie not found!"));
        assert!(state.results.is_empty());

        let state = session.trigger("y").await;
        assert_eq!(state.error.as_deref(), Some(NO_MOVIES_FOUND));
    }

    #[tokio::test]
    async fn test_transport_failure_sets_fallback_and_clears_loading() {
        let mock = Arc::new(MockProvider::new());
        mock.on("ok", MockReply::Found(vec![movie(1, "Alien")]));
        mock.on("boom", MockReply::Fail("connection reset".to_string()));
        let session = session(&mock, TriggerPolicy::Auto);

        session.trigger("ok").await;
        let state = session.trigger("boom").await;

        assert_eq!(state.error.as_deref(), Some(FAILED_TO_FETCH));
        assert!(!state.is_loading);
        assert!(state.results.is_empty());
    }

    #[tokio::test]
    async fn test_new_trigger_clears_previous_error() {
        let mock = Arc::new(MockProvider::new());
        mock.on("miss", MockReply::NotFound(None));
        mock.on("hit", MockReply::Found(vec![movie(1, "Alien")]));
        let session = session(&mock, TriggerPolicy::Auto);

        session.trigger("miss").await;
        let state = session.trigger("hit").await;

        assert!(state.error.is_none());
        assert_eq!(state.results.len(), 1);
    }

    #[tokio::test]
    async fn test_loading_is_visible_while_in_flight() {
        let mock = Arc::new(MockProvider::new());
        let gate = mock.hold("slow");
        let session = Arc::new(session(&mock, TriggerPolicy::Auto));

        let task = tokio::spawn({
            let session = session.clone();
            async move { session.trigger("slow").await }
        });
        while mock.call_count() == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let during = session.snapshot();
        assert!(during.is_loading);
        assert!(during.error.is_none());

        gate.notify_one();
        let after = task.await.unwrap();
        assert!(!after.is_loading);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let mock = Arc::new(MockProvider::new());
        mock.on("first", MockReply::Found(vec![movie(1, "First")]));
        mock.on("second", MockReply::Found(vec![movie(2, "Second")]));
        let first_gate = mock.hold("first");
        let session = Arc::new(session(&mock, TriggerPolicy::Auto));

        let first = tokio::spawn({
            let session = session.clone();
            async move { session.trigger("first").await }
        });
        while mock.call_count() == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let second = session.trigger("second").await;
        assert_eq!(second.results[0].title, "Second");

        first_gate.notify_one();
        let after_first = first.await.unwrap();

        assert_eq!(after_first.results[0].title, "Second");
        assert_eq!(session.snapshot().results[0].title, "Second");
        assert!(!session.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_empty_query_supersedes_in_flight_search() {
        let mock = Arc::new(MockProvider::new());
        mock.on("slow", MockReply::Found(vec![movie(1, "Slow")]));
        let gate = mock.hold("slow");
        let session = Arc::new(session(&mock, TriggerPolicy::Auto));

        let pending = tokio::spawn({
            let session = session.clone();
            async move { session.trigger("slow").await }
        });
        while mock.call_count() == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let cleared = session.trigger("").await;
        assert!(!cleared.is_loading);

        gate.notify_one();
        pending.await.unwrap();
        assert!(session.snapshot().results.is_empty());
    }

    #[tokio::test]
    async fn test_dropped_trigger_clears_loading() {
        let mock = Arc::new(MockProvider::new());
        let _gate = mock.hold("never");
        let session = session(&mock, TriggerPolicy::Auto);

        let result =
            tokio::time::timeout(Duration::from_millis(20), session.trigger("never")).await;

        assert!(result.is_err());
        assert!(!session.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_auto_policy_searches_on_start_and_change() {
        let mock = Arc::new(MockProvider::new());
        let session = SearchSession::with_query(mock.clone(), TriggerPolicy::Auto, "avatar");

        session.start().await;
        session.start().await;
        assert_eq!(mock.queries(), ["avatar"]);

        session.set_query("avatar").await;
        assert_eq!(mock.call_count(), 1);

        session.set_query("alien").await;
        assert_eq!(mock.queries(), ["avatar", "alien"]);
        assert_eq!(session.query(), "alien");
    }

    #[tokio::test]
    async fn test_manual_policy_waits_for_submit() {
        let mock = Arc::new(MockProvider::new());
        mock.on("heat", MockReply::Found(vec![movie(1, "Heat")]));
        let session = session(&mock, TriggerPolicy::Manual);

        let before = session.start().await;
        assert!(!before.has_searched);
        assert!(session.with_view(|view| view == MainView::Placeholder));

        session.set_query("heat").await;
        assert_eq!(mock.call_count(), 0);
        assert!(!session.snapshot().has_searched);

        let state = session.submit().await;
        assert!(state.has_searched);
        assert_eq!(state.results.len(), 1);
        assert_eq!(mock.queries(), ["heat"]);
    }

    #[tokio::test]
    async fn test_manual_submit_with_empty_query_keeps_placeholder() {
        let mock = Arc::new(MockProvider::new());
        let session = session(&mock, TriggerPolicy::Manual);

        let state = session.submit().await;

        assert!(!state.has_searched);
        assert_eq!(mock.call_count(), 0);
        assert!(session.with_view(|view| view == MainView::Placeholder));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_edits_leave_results_for_stored_query() {
        let mock = Arc::new(MockProvider::new());
        let queries = ["alien", "aliens", "heat", "ronin"];
        for (i, query) in queries.iter().enumerate() {
            mock.on(query, MockReply::Found(vec![movie(i, query)]));
        }

        for _ in 0..200 {
            let session = Arc::new(session(&mock, TriggerPolicy::Auto));
            let edits: Vec<_> = queries
                .iter()
                .copied()
                .map(|query| {
                    let session = session.clone();
                    tokio::spawn(async move { session.set_query(query).await })
                })
                .collect();
            for edit in edits {
                edit.await.unwrap();
            }

            let state = session.snapshot();
            assert!(!state.is_loading);
            assert_eq!(state.results[0].title, session.query());
        }
    }

    #[test]
    fn test_trigger_policy_parsing() {
        assert_eq!("AUTO".parse::<TriggerPolicy>(), Ok(TriggerPolicy::Auto));
        assert_eq!("manual".parse::<TriggerPolicy>(), Ok(TriggerPolicy::Manual));
        assert!("button".parse::<TriggerPolicy>().is_err());
        assert_eq!(TriggerPolicy::Manual.to_string(), "manual");
    }

    proptest! {
        #[test]
        fn results_match_provider_sequence(titles in prop::collection::vec("[A-Za-z ]{1,16}", 0..12)) {
            let movies: Vec<_> = titles.iter().enumerate().map(|(i, t)| movie(i, t)).collect();
            let mock = Arc::new(MockProvider::with_fallback(MockReply::Found(movies.clone())));
            let session = SearchSession::new(mock, TriggerPolicy::Auto);

            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let state = runtime.block_on(session.trigger("q"));

            prop_assert_eq!(state.results, movies);
            prop_assert!(state.error.is_none());
        }
    }
}
