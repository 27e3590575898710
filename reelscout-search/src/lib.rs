//! Reelscout Search - Movie lookup and search sessions

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Queries a movie database by title and keeps the per-page UI state that a
//! renderer turns into a loader, an error line, a placeholder or a poster grid.

pub mod errors;
pub mod providers;
pub mod service;
pub mod session;
pub mod types;
pub mod view;

// Re-export main types
pub use errors::MovieSearchError;
pub use providers::{DemoProvider, MovieSearchProvider, OmdbProvider};
pub use service::MovieSearchService;
pub use session::{SearchSession, TriggerPolicy};
pub use types::{
    FAILED_TO_FETCH, MovieSummary, NO_MOVIES_FOUND, NO_POSTER_SENTINEL, POSTER_PLACEHOLDER_URL,
    SearchOutcome, UiState,
};
pub use view::MainView;
