//! Reelscout Web - Server-rendered search UI

#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! HTMX + Tailwind pages for the auto-trigger and manual-trigger search
//! variants, the fragment endpoints they call, and a JSON search API.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod render;
pub mod server;
pub mod sessions;

// Re-export main types
pub use server::{AppState, router, run_server};
pub use sessions::SessionRegistry;
