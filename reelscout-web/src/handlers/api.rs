//! JSON API handlers for external clients

use axum::extract::{Query, State};
use axum::response::Json;
use reelscout_search::{MainView, TriggerPolicy, UiState};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ApiSearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub policy: TriggerPolicy,
}

#[derive(Debug, Serialize)]
pub struct ApiSearchResponse {
    pub query: String,
    /// Which single view a renderer would show for this state
    pub view: &'static str,
    pub state: UiState,
}

/// Runs one search cycle in a throwaway session and returns its state.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<ApiSearchQuery>,
) -> Json<ApiSearchResponse> {
    let session = state.service().session(params.policy);
    let ui = session.trigger(&params.q).await;

    let view = match MainView::from_state(&ui, params.policy) {
        MainView::Loading => "loading",
        MainView::Error(_) => "error",
        MainView::Placeholder => "placeholder",
        MainView::Results(_) => "results",
    };

    Json(ApiSearchResponse {
        query: params.q,
        view,
        state: ui,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.service().provider_name(),
        "sessions": state.sessions.len(),
        "uptime_secs": state.server_started_at.elapsed().as_secs(),
    }))
}
