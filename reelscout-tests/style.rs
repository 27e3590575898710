//! Style Enforcement Tests
//!
//! Scans the production sources of every workspace crate for patterns that
//! clippy does not reject on its own.
//!
//! # Test Organization
//!
//! - `production_code` - No dead-code allowances, no panicking unwraps

#[path = "style/production_code.rs"]
mod production_code;
