//! HTMX + Tailwind web server for Reelscout
//!
//! Serves the two search pages, their htmx fragment endpoints and a small
//! JSON API. All pages use server-side rendering.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use reelscout_core::{ReelscoutConfig, RuntimeMode, SearchConfig};
use reelscout_search::MovieSearchService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api_search, health, search_fragment, submit_fragment};
use crate::pages::{auto_search_page, manual_search_page};
use crate::sessions::SessionRegistry;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRegistry,
    pub search: Arc<SearchConfig>,
    pub server_started_at: std::time::Instant,
}

impl AppState {
    /// Builds state around an existing search service.
    pub fn new(service: MovieSearchService, config: &ReelscoutConfig) -> Self {
        Self {
            sessions: SessionRegistry::new(service, config.web.max_sessions),
            search: Arc::new(config.search.clone()),
            server_started_at: std::time::Instant::now(),
        }
    }

    pub fn service(&self) -> &MovieSearchService {
        self.sessions.service()
    }
}

/// Assembles the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(auto_search_page))
        .route("/manual", get(manual_search_page))
        // HTMX partial update endpoints
        .route("/htmx/search", get(search_fragment))
        .route("/htmx/submit", post(submit_fragment))
        // JSON API endpoints (for external clients)
        .route("/api/search", get(api_search))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Validates configuration, builds the search service and serves until the
/// process stops.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - Invalid configuration, provider setup failure,
///   or the listener cannot bind
pub async fn run_server(
    config: ReelscoutConfig,
    mode: RuntimeMode,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate(mode)?;
    let addr = config.web.socket_addr()?;

    let service = MovieSearchService::from_runtime_mode(&config, mode)?;
    let app = router(AppState::new(service, &config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %mode,
        "Reelscout running on http://{} (manual search at /manual)",
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;
    Ok(())
}
