//! Full page handlers using component system
//!
//! Pages compose multiple components into complete HTML responses.
//! All pages use the same base layout with HTMX and Tailwind CSS.

pub mod base;
pub mod search;

// Re-export page handlers
pub use base::render_page;
pub use search::{PageParams, auto_search_page, manual_search_page};
