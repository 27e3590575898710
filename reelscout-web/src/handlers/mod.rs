//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;

// Re-export handler functions
pub use api::{ApiSearchQuery, ApiSearchResponse, api_search, health};
pub use htmx::{SearchForm, search_fragment, submit_fragment};
