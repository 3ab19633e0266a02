//! Core utilities for the Sleeper recap CLI
//!
//! This module consolidates I/O helpers shared across commands:
//! - `cache`: cache/config directories and overwrite-in-place file writes
//! - `http`: the shared Sleeper HTTP client

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{players_table_path, try_read_to_string, write_string, PayloadPaths};
pub use http::build_client;
