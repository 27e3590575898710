//! In-memory registry of browser search sessions.
//!
//! Each rendered page gets its own [`SearchSession`], addressed by a UUID the
//! page sends back with every htmx request. The registry is an LRU bounded by
//! `WebConfig::max_sessions`; evicted or unknown ids get a fresh session.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use reelscout_search::{MovieSearchService, SearchSession, TriggerPolicy};
use uuid::Uuid;

/// A session looked up or created by the registry.
pub struct SessionHandle {
    pub id: Uuid,
    pub session: Arc<SearchSession>,
    /// True when the requested id was missing and a new session was opened
    pub created: bool,
}

/// Bounded session store shared by all handlers.
#[derive(Clone)]
pub struct SessionRegistry {
    service: MovieSearchService,
    sessions: Arc<Mutex<LruCache<Uuid, Arc<SearchSession>>>>,
}

impl SessionRegistry {
    /// Creates a registry holding at most `capacity` sessions (minimum one).
    pub fn new(service: MovieSearchService, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            service,
            sessions: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn service(&self) -> &MovieSearchService {
        &self.service
    }

    /// Opens a new session seeded with `initial_query`.
    pub fn open(&self, policy: TriggerPolicy, initial_query: &str) -> SessionHandle {
        let id = Uuid::new_v4();
        let session = Arc::new(self.service.session_with_query(policy, initial_query));

        if let Some((evicted, _)) = self.sessions.lock().push(id, session.clone()) {
            if evicted != id {
                tracing::debug!(%evicted, "Search session evicted");
            }
        }
        tracing::debug!(%id, %policy, "Search session opened");

        SessionHandle {
            id,
            session,
            created: true,
        }
    }

    /// Finds the session for `id`, or opens one when the id is absent,
    /// unknown, or belongs to a session with a different policy.
    pub fn resolve(&self, id: Option<Uuid>, policy: TriggerPolicy) -> SessionHandle {
        if let Some(id) = id {
            let existing = self.sessions.lock().get(&id).cloned();
            if let Some(session) = existing.filter(|s| s.policy() == policy) {
                return SessionHandle {
                    id,
                    session,
                    created: false,
                };
            }
        }
        self.open(policy, "")
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reelscout_search::providers::MockProvider;

    use super::*;

    fn registry(capacity: usize) -> SessionRegistry {
        SessionRegistry::new(
            MovieSearchService::with_provider(Arc::new(MockProvider::new())),
            capacity,
        )
    }

    #[test]
    fn test_resolve_returns_existing_session() {
        let registry = registry(4);
        let opened = registry.open(TriggerPolicy::Auto, "avatar");

        let resolved = registry.resolve(Some(opened.id), TriggerPolicy::Auto);

        assert!(!resolved.created);
        assert_eq!(resolved.id, opened.id);
        assert!(Arc::ptr_eq(&resolved.session, &opened.session));
        assert_eq!(resolved.session.query(), "avatar");
    }

    #[test]
    fn test_resolve_unknown_or_mismatched_opens_new() {
        let registry = registry(4);
        let auto = registry.open(TriggerPolicy::Auto, "");

        let unknown = registry.resolve(Some(Uuid::new_v4()), TriggerPolicy::Auto);
        assert!(unknown.created);

        let mismatched = registry.resolve(Some(auto.id), TriggerPolicy::Manual);
        assert!(mismatched.created);
        assert_ne!(mismatched.id, auto.id);
        assert_eq!(mismatched.session.policy(), TriggerPolicy::Manual);

        assert!(registry.resolve(None, TriggerPolicy::Auto).created);
    }

    #[test]
    fn test_capacity_evicts_least_recent() {
        let registry = registry(2);
        let first = registry.open(TriggerPolicy::Auto, "");
        let second = registry.open(TriggerPolicy::Auto, "");

        // Touch the first so the second becomes least recent.
        registry.resolve(Some(first.id), TriggerPolicy::Auto);
        registry.open(TriggerPolicy::Auto, "");

        assert_eq!(registry.len(), 2);
        assert!(!registry.resolve(Some(first.id), TriggerPolicy::Auto).created);
        assert!(registry.resolve(Some(second.id), TriggerPolicy::Auto).created);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let registry = registry(0);
        registry.open(TriggerPolicy::Auto, "");
        assert_eq!(registry.len(), 1);
    }
}
