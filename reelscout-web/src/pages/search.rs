//! Search pages - the auto-trigger and manual-trigger variants

use axum::extract::{Query, State};
use axum::response::Html;
use reelscout_search::{TriggerPolicy, UiState};
use serde::Deserialize;
use uuid::Uuid;

use crate::components::{button, headline, loader, search_input};
use crate::pages::base::render_page;
use crate::render::{MAIN_SLOT_ID, SESSION_FIELD_ID, main_content, session_field};
use crate::server::AppState;

const HEADLINE: &str = "Find your favourite movie.";

/// Optional query string for the page routes.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Overrides the initial query
    pub query: Option<String>,
}

/// Auto variant: mounts a session and searches immediately with the initial
/// query; every later edit of the search box searches again.
pub async fn auto_search_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let query = params
        .query
        .unwrap_or_else(|| state.search.default_query.clone());
    let handle = state.sessions.open(TriggerPolicy::Auto, &query);
    let ui = handle.session.start().await;

    let search_box = search_input(
        &query,
        Some(&format!(
            r##"hx-get="/htmx/search" hx-trigger="input changed delay:{delay}ms, search" hx-target="#{MAIN_SLOT_ID}" hx-swap="innerHTML" hx-include="#{SESSION_FIELD_ID}" hx-indicator="#content-area" hx-sync="this:replace""##,
            delay = state.search.auto_debounce_ms,
        )),
    );
    let controls = format!(
        r#"{}
        <div class="w-[90%] md:w-[50%]">{search_box}</div>"#,
        session_field(handle.id, false)
    );

    render_page(
        "Search",
        "auto",
        &page_body(&controls, &ui, TriggerPolicy::Auto),
    )
}

/// Manual variant: shows a placeholder until the user presses Search.
pub async fn manual_search_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let query = params.query.unwrap_or_default();
    let handle = state.sessions.open(TriggerPolicy::Manual, &query);
    let ui = handle.session.start().await;

    render_page(
        "Search",
        "manual",
        &page_body(
            &manual_form(handle.id, &query),
            &ui,
            TriggerPolicy::Manual,
        ),
    )
}

fn manual_form(session_id: Uuid, query: &str) -> String {
    format!(
        r##"<form hx-post="/htmx/submit" hx-target="#{MAIN_SLOT_ID}" hx-swap="innerHTML"
                hx-indicator="#content-area" hx-sync="this:replace"
                class="flex w-[90%] md:w-[50%] space-x-3">
            {}
            <div class="flex-1">{}</div>
            {}
        </form>"##,
        session_field(session_id, false),
        search_input(query, None),
        button("Search", Some(r#"type="submit""#)),
    )
}

fn page_body(controls: &str, ui: &UiState, policy: TriggerPolicy) -> String {
    format!(
        r#"{}
        <div class="flex justify-center my-6 mt-12">
            {controls}
        </div>
        <div id="content-area">
            <div class="loading-indicator">{}</div>
            <div id="{MAIN_SLOT_ID}" class="main-slot">{}</div>
        </div>"#,
        headline(HEADLINE),
        loader(),
        main_content(ui, policy),
    )
}
