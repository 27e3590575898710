//! HTMX handlers for partial updates
//!
//! Both endpoints drive the caller's session and answer with the re-rendered
//! main content. When the caller's session id is unknown (expired, evicted or
//! forged) a new session is opened and its id is swapped in out of band.

use axum::extract::{Form, Query, State};
use axum::response::Html;
use reelscout_search::TriggerPolicy;
use serde::Deserialize;
use uuid::Uuid;

use crate::render::{main_content, session_field};
use crate::server::AppState;
use crate::sessions::SessionHandle;

/// Parameters sent by the search box and the manual form.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    /// Session id from the hidden field
    pub sid: Option<String>,
    /// Current search box value
    #[serde(default)]
    pub query: String,
}

impl SearchForm {
    fn session_id(&self) -> Option<Uuid> {
        self.sid.as_deref().and_then(|s| Uuid::parse_str(s.trim()).ok())
    }
}

/// Auto variant: the search box changed.
pub async fn search_fragment(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Html<String> {
    let handle = state
        .sessions
        .resolve(form.session_id(), TriggerPolicy::Auto);
    let ui = handle.session.set_query(&form.query).await;

    Html(fragment(&handle, &main_content(&ui, TriggerPolicy::Auto)))
}

/// Manual variant: the Search button was pressed.
pub async fn submit_fragment(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let handle = state
        .sessions
        .resolve(form.session_id(), TriggerPolicy::Manual);
    handle.session.set_query(&form.query).await;
    let ui = handle.session.submit().await;

    Html(fragment(&handle, &main_content(&ui, TriggerPolicy::Manual)))
}

fn fragment(handle: &SessionHandle, content: &str) -> String {
    if handle.created {
        format!("{content}{}", session_field(handle.id, true))
    } else {
        content.to_string()
    }
}
