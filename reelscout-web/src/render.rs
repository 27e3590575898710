//! Main content rendering: a pure function of UI state.

use reelscout_search::{MainView, TriggerPolicy, UiState};
use uuid::Uuid;

use crate::components::{error_message, loader, movie_grid, search_placeholder};

/// Element id the htmx requests swap into.
pub const MAIN_SLOT_ID: &str = "main-slot";

/// Element id of the hidden field carrying the session id.
pub const SESSION_FIELD_ID: &str = "session-id";

/// Hidden input carrying the session id. With `out_of_band` set, htmx swaps
/// it into the page alongside a fragment, replacing a stale id.
pub fn session_field(id: Uuid, out_of_band: bool) -> String {
    let oob = if out_of_band { r#" hx-swap-oob="true""# } else { "" };
    format!(r#"<input type="hidden" id="{SESSION_FIELD_ID}" name="sid" value="{id}"{oob} />"#)
}

/// Renders whichever single view the state selects.
pub fn main_content(state: &UiState, policy: TriggerPolicy) -> String {
    match MainView::from_state(state, policy) {
        MainView::Loading => loader(),
        MainView::Error(message) => error_message(message),
        MainView::Placeholder => search_placeholder(),
        MainView::Results(movies) => movie_grid(movies),
    }
}

#[cfg(test)]
mod tests {
    use reelscout_search::MovieSummary;

    use super::*;

    fn state_with_results() -> UiState {
        UiState {
            results: vec![MovieSummary {
                imdb_id: "tt0078748".to_string(),
                title: "Alien".to_string(),
                year: "1979".to_string(),
                poster: "N/A".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_suppresses_error() {
        let state = UiState {
            is_loading: true,
            error: Some("X".to_string()),
            ..state_with_results()
        };
        let html = main_content(&state, TriggerPolicy::Auto);

        assert!(html.contains("Loading..."));
        assert!(!html.contains("text-red-500"));
        assert!(!html.contains("Alien"));
    }

    #[test]
    fn test_error_suppresses_results() {
        let state = UiState {
            error: Some("Movie not found!".to_string()),
            has_searched: true,
            ..state_with_results()
        };
        let html = main_content(&state, TriggerPolicy::Manual);

        assert!(html.contains("Movie not found!"));
        assert!(!html.contains("Alien"));
    }

    #[test]
    fn test_manual_placeholder_before_search() {
        let html = main_content(&state_with_results(), TriggerPolicy::Manual);

        assert!(html.contains("Search for a movie to get started"));
        assert!(!html.contains("Alien"));
    }

    #[test]
    fn test_session_field() {
        let id = Uuid::nil();
        let plain = session_field(id, false);
        assert!(plain.contains(r#"value="00000000-0000-0000-0000-000000000000""#));
        assert!(!plain.contains("hx-swap-oob"));
        assert!(session_field(id, true).contains(r#"hx-swap-oob="true""#));
    }

    #[test]
    fn test_results_grid() {
        let html = main_content(&state_with_results(), TriggerPolicy::Auto);

        assert!(html.contains("Alien"));
        assert!(html.contains("1979"));
    }
}
