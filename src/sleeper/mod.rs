//! Sleeper API client, response shapes and the players-table cache

pub mod http;
pub mod player_cache;
pub mod types;

pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use player_cache::load_or_fetch_players;
