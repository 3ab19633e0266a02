use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cli::types::{LeagueId, Week};
use crate::core::build_client;
use crate::error::{RecapError, Result};
use crate::sleeper::types::{
    LeagueSnapshot, NflState, PlayerTable, SleeperLeague, SleeperMatchup, SleeperRoster,
    SleeperTransaction, SleeperUser,
};

#[cfg(test)]
mod tests;

/// Base path for the Sleeper v1 read API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Thin wrapper over a shared `reqwest::Client` and the API base URL.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_url(build_client()?, SLEEPER_BASE_URL))
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base}{endpoint}` and decode it. Sleeper answers unknown ids with
    /// a literal `null` body, which becomes `NoData`.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");

        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        if value.is_null() {
            return Err(RecapError::NoData {
                endpoint: endpoint.to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_nfl_state(&self) -> Result<NflState> {
        self.get_json("/state/nfl").await
    }

    pub async fn get_league(&self, league_id: LeagueId) -> Result<SleeperLeague> {
        self.get_json(&format!("/league/{}", league_id)).await
    }

    pub async fn get_users(&self, league_id: LeagueId) -> Result<Vec<SleeperUser>> {
        self.get_json(&format!("/league/{}/users", league_id)).await
    }

    pub async fn get_rosters(&self, league_id: LeagueId) -> Result<Vec<SleeperRoster>> {
        self.get_json(&format!("/league/{}/rosters", league_id)).await
    }

    pub async fn get_matchups(&self, league_id: LeagueId, week: Week) -> Result<Vec<SleeperMatchup>> {
        self.get_json(&format!("/league/{}/matchups/{}", league_id, week))
            .await
    }

    pub async fn get_transactions(
        &self,
        league_id: LeagueId,
        week: Week,
    ) -> Result<Vec<SleeperTransaction>> {
        self.get_json(&format!("/league/{}/transactions/{}", league_id, week))
            .await
    }

    /// The full NFL players table (several MB); see `player_cache` for the
    /// on-disk copy.
    pub async fn get_players(&self) -> Result<PlayerTable> {
        self.get_json("/players/nfl").await
    }

    /// Last completed week per Sleeper's NFL state.
    pub async fn last_completed_week(&self) -> Result<Week> {
        let state = self.get_nfl_state().await?;
        let current = state.week.unwrap_or(0);
        let week = Week::last_completed(current);
        tracing::debug!(current, %week, "resolved last completed week");
        Ok(week)
    }

    /// Fetch one week of league data concurrently and materialize it.
    pub async fn fetch_league_snapshot(
        &self,
        league_id: LeagueId,
        week: Week,
        players: PlayerTable,
    ) -> Result<LeagueSnapshot> {
        let (league, users, rosters, matchups, transactions) = tokio::try_join!(
            self.get_league(league_id),
            self.get_users(league_id),
            self.get_rosters(league_id),
            self.get_matchups(league_id, week),
            self.get_transactions(league_id, week),
        )?;

        Ok(LeagueSnapshot {
            week,
            league,
            users,
            rosters,
            matchups,
            transactions,
            players,
        })
    }
}
