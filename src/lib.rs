//! Sleeper Fantasy Football Recap Library
//!
//! Turns one week of raw Sleeper league data into a deterministic JSON
//! "weekly payload" for a downstream commissioner bot: matchup results with
//! classifications and predictions, headline stories, standings with playoff
//! buckets, power rankings, performance highlights and transactions.
//!
//! ## Features
//!
//! - **Data Retrieval**: Fetch league, users, rosters, matchups and transactions from the Sleeper API
//! - **Player Cache**: The multi-megabyte players table is cached on disk between runs
//! - **Payload Pipeline**: Pure, total transformation from a [`LeagueSnapshot`](sleeper::types::LeagueSnapshot) to a [`WeeklyPayload`]
//! - **Trimmed Documents**: Size-bounded payloads for prompt construction
//! - **Offline Rebuilds**: Save a snapshot once and rebuild payloads without network access
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_recap::{LeagueId, Week, commands::week_payload::*};
//!
//! # async fn example() -> sleeper_recap::Result<()> {
//! let params = WeekPayloadParams {
//!     league_id: Some(LeagueId::new(1180208789911158784)),
//!     week: Some(Week::new(6)),
//!     ..Default::default()
//! };
//!
//! handle_week_payload(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_LEAGUE_ID=1180208789911158784
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod recap;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, RosterId, Week};
pub use error::{RecapError, Result};
pub use recap::{
    build_weekly_payload,
    config::RecapConfig,
    payload::{TrimmedPayload, WeeklyPayload},
};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
