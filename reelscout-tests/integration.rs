//! Integration tests for Reelscout
//!
//! These tests drive the OMDb client against a local stub server and the web
//! router in-process, checking the pieces together rather than in isolation.

#[path = "integration/omdb_client.rs"]
mod omdb_client;

#[path = "integration/web_routes.rs"]
mod web_routes;
