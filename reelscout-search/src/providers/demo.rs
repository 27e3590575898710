//! Demo provider for development mode.
//!
//! Answers from a small built-in catalogue so the UI can be exercised without
//! an OMDb key or network access. Mimics OMDb's miss messages.

use async_trait::async_trait;

use super::MovieSearchProvider;
use crate::errors::MovieSearchError;
use crate::types::{MovieSummary, SearchOutcome};

const CATALOGUE: &[(&str, &str, &str)] = &[
    ("tt0499549", "Avatar", "2009"),
    ("tt1630029", "Avatar: The Way of Water", "2022"),
    ("tt0417299", "Avatar: The Last Airbender", "2005–2008"),
    ("tt0078748", "Alien", "1979"),
    ("tt0090605", "Aliens", "1986"),
    ("tt0133093", "The Matrix", "1999"),
    ("tt1375666", "Inception", "2010"),
    ("tt0816692", "Interstellar", "2014"),
    ("tt0113277", "Heat", "1995"),
    ("tt0245429", "Spirited Away", "2001"),
];

/// Offline provider backed by a fixed catalogue.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MovieSearchProvider for DemoProvider {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn search(&self, query: &str) -> Result<SearchOutcome, MovieSearchError> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < 2 {
            return Ok(SearchOutcome::NotFound {
                message: Some("Too many results.".to_string()),
            });
        }

        let matches: Vec<MovieSummary> = CATALOGUE
            .iter()
            .filter(|(_, title, _)| title.to_lowercase().contains(&needle))
            .map(|(id, title, year)| MovieSummary {
                imdb_id: (*id).to_string(),
                title: (*title).to_string(),
                year: (*year).to_string(),
                poster: crate::types::NO_POSTER_SENTINEL.to_string(),
            })
            .collect();

        if matches.is_empty() {
            Ok(SearchOutcome::NotFound {
                message: Some("Movie not found!".to_string()),
            })
        } else {
            Ok(SearchOutcome::Found(matches))
        }
    }
}
