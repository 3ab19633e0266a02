//! Type-safe wrappers for Sleeper identifiers and weeks.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PlayerId, RosterId};
pub use time::Week;
