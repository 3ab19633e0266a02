//! Command implementations for the Sleeper recap CLI

pub mod build_snapshot;
pub mod common;
pub mod league_data;
pub mod season_payloads;
pub mod week_payload;

use crate::{error::RecapError, sleeper::SleeperClient, LeagueId, Result, Week, LEAGUE_ID_ENV_VAR};

/// Use the given league id, else `SLEEPER_LEAGUE_ID`.
///
/// An env value that is set but not a number is an `InvalidLeagueId` error
/// rather than being treated as missing.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(s) if !s.trim().is_empty() => s.parse(),
        _ => Err(RecapError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Use the given week, else ask Sleeper for the last completed one.
pub async fn resolve_week(client: &SleeperClient, week: Option<Week>) -> Result<Week> {
    match week {
        Some(w) => w.validate(),
        None => client.last_completed_week().await,
    }
}
