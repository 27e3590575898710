//! Plain-text rendering of a search state for the terminal.

use std::fmt::Write;

use reelscout_search::{MainView, TriggerPolicy, UiState};

/// Renders the single view the state selects, as terminal text.
pub fn render_text(state: &UiState, policy: TriggerPolicy) -> String {
    match MainView::from_state(state, policy) {
        MainView::Loading => "Loading...".to_string(),
        MainView::Error(message) => message.to_string(),
        MainView::Placeholder => "Search for a movie to get started.".to_string(),
        MainView::Results(movies) => {
            let mut out = format!("{} movie(s)\n", movies.len());
            for movie in movies {
                // Writing to a String cannot fail.
                let _ = write!(
                    out,
                    "\nMovie Name: {}\nRelease Year: {}\nPoster: {}\nIMDb: {}\n",
                    movie.title,
                    movie.year,
                    movie.poster_src(),
                    movie.imdb_id
                );
            }
            out.trim_end().to_string()
        }
    }
}
