//! Main content selection shared by every renderer.

use crate::session::TriggerPolicy;
use crate::types::{MovieSummary, UiState};

/// What the main content area shows. Exactly one variant applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView<'a> {
    /// A search is in flight
    Loading,
    /// The last search failed or matched nothing
    Error(&'a str),
    /// Manual policy before the first search
    Placeholder,
    /// Result grid, possibly empty
    Results(&'a [MovieSummary]),
}

impl<'a> MainView<'a> {
    /// Picks the view by priority: loading, then error, then the manual
    /// placeholder, then results (possibly empty).
    pub fn from_state(state: &'a UiState, policy: TriggerPolicy) -> Self {
        if state.is_loading {
            Self::Loading
        } else if let Some(error) = state.error.as_deref() {
            Self::Error(error)
        } else if policy == TriggerPolicy::Manual && !state.has_searched {
            Self::Placeholder
        } else {
            Self::Results(&state.results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieSummary;

    fn results() -> Vec<MovieSummary> {
        vec![MovieSummary {
            imdb_id: "tt0078748".to_string(),
            title: "Alien".to_string(),
            year: "1979".to_string(),
            poster: "N/A".to_string(),
        }]
    }

    #[test]
    fn test_loading_outranks_error() {
        let state = UiState {
            is_loading: true,
            error: Some("X".to_string()),
            has_searched: true,
            results: results(),
        };
        assert_eq!(
            MainView::from_state(&state, TriggerPolicy::Auto),
            MainView::Loading
        );
        assert_eq!(
            MainView::from_state(&state, TriggerPolicy::Manual),
            MainView::Loading
        );
    }

    #[test]
    fn test_error_outranks_results_and_placeholder() {
        let state = UiState {
            error: Some("Movie not found!".to_string()),
            results: results(),
            ..Default::default()
        };
        assert_eq!(
            MainView::from_state(&state, TriggerPolicy::Manual),
            MainView::Error("Movie not found!")
        );
    }

    #[test]
    fn test_manual_placeholder_ignores_results() {
        let state = UiState {
            results: results(),
            ..Default::default()
        };
        assert_eq!(
            MainView::from_state(&state, TriggerPolicy::Manual),
            MainView::Placeholder
        );
        // The auto variant has no placeholder.
        assert!(matches!(
            MainView::from_state(&state, TriggerPolicy::Auto),
            MainView::Results(r) if r.len() == 1
        ));
    }

    #[test]
    fn test_searched_empty_results_show_empty_grid() {
        let state = UiState {
            has_searched: true,
            ..Default::default()
        };
        assert_eq!(
            MainView::from_state(&state, TriggerPolicy::Manual),
            MainView::Results(&[])
        );
    }
}
