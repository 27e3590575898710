//! Data types for movie search functionality.

use serde::{Deserialize, Serialize};

/// Poster value the movie database uses when no artwork exists.
pub const NO_POSTER_SENTINEL: &str = "N/A";

/// Image shown in place of a missing poster.
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// Message shown when the provider reports no match without saying why.
pub const NO_MOVIES_FOUND: &str = "No movies found.";

/// Message shown for any transport or decoding failure.
pub const FAILED_TO_FETCH: &str = "Failed to fetch movies.";

/// One movie returned by a search.
///
/// Deserializes from the OMDb item shape (`imdbID`, `Title`, `Year`, `Poster`)
/// and serializes with snake_case names for the JSON API. Every field is
/// optional on the wire so one sparse item cannot sink the whole result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// IMDb identifier, unique within a result set
    #[serde(rename(deserialize = "imdbID"), default)]
    pub imdb_id: String,
    /// Display title
    #[serde(rename(deserialize = "Title"), default)]
    pub title: String,
    /// Release year as the provider formats it (may be a range for series)
    #[serde(rename(deserialize = "Year"), default)]
    pub year: String,
    /// Poster URL or [`NO_POSTER_SENTINEL`]
    #[serde(rename(deserialize = "Poster"), default)]
    pub poster: String,
}

impl MovieSummary {
    /// Image source to render for this movie.
    ///
    /// Never returns the sentinel itself; missing artwork maps to
    /// [`POSTER_PLACEHOLDER_URL`].
    pub fn poster_src(&self) -> &str {
        let poster = self.poster.trim();
        if poster.is_empty() || poster == NO_POSTER_SENTINEL {
            POSTER_PLACEHOLDER_URL
        } else {
            &self.poster
        }
    }
}

/// Interpreted answer from a provider that responded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Positive match indicator; results in provider order.
    Found(Vec<MovieSummary>),
    /// Negative match indicator, with the provider's explanation if it sent one.
    NotFound {
        /// Provider explanation, if non-empty
        message: Option<String>,
    },
}

/// Everything the rendering layer needs to draw the main content area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// A search is in flight
    pub is_loading: bool,
    /// User-facing message from the last search, if it failed or missed
    pub error: Option<String>,
    /// At least one non-empty search has been triggered
    pub has_searched: bool,
    /// Matches from the last successful search, in provider order
    pub results: Vec<MovieSummary>,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn movie(poster: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: "tt0499549".to_string(),
            title: "Avatar".to_string(),
            year: "2009".to_string(),
            poster: poster.to_string(),
        }
    }

    #[test]
    fn test_poster_sentinel_uses_placeholder() {
        assert_eq!(movie("N/A").poster_src(), POSTER_PLACEHOLDER_URL);
        assert_eq!(movie("").poster_src(), POSTER_PLACEHOLDER_URL);

        let real = movie("https://m.media-amazon.com/images/avatar.jpg");
        assert_eq!(
            real.poster_src(),
            "https://m.media-amazon.com/images/avatar.jpg"
        );
    }

    #[test]
    fn test_deserialize_omdb_item() {
        let json = r#"{
            "Title": "Avatar",
            "Year": "2009",
            "imdbID": "tt0499549",
            "Type": "movie",
            "Poster": "N/A"
        }"#;

        let parsed: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, movie("N/A"));
    }

    #[test]
    fn test_sparse_item_still_deserializes() {
        let json = r#"{"imdbID": "tt1", "Year": "2001", "Poster": "N/A"}"#;

        let parsed: MovieSummary = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.imdb_id, "tt1");
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.poster_src(), POSTER_PLACEHOLDER_URL);
    }

    #[test]
    fn test_serialize_uses_snake_case() {
        let value = serde_json::to_value(movie("N/A")).unwrap();
        assert_eq!(value["imdb_id"], "tt0499549");
        assert_eq!(value["title"], "Avatar");
        assert!(value.get("Title").is_none());
    }

    proptest! {
        #[test]
        fn poster_src_never_yields_sentinel(poster in "(N/A|\\s*|https?://[a-z]{1,12}\\.[a-z]{2,3}/[a-z0-9]{0,8}\\.jpg)") {
            let m = movie(&poster);
            prop_assert_ne!(m.poster_src(), NO_POSTER_SENTINEL);
            prop_assert!(!m.poster_src().trim().is_empty());
        }
    }
}
