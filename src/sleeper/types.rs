use crate::cli::types::{PlayerId, RosterId, Week};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};


/// Treat an explicit JSON `null` the same as a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `/state/nfl`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NflState {
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
}

/// `/league/{id}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperLeague {
    #[serde(default)]
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default)]
    pub scoring_settings: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// One entry of `/league/{id}/users`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

impl SleeperUser {
    pub fn team_name(&self) -> Option<&str> {
        self.metadata.as_ref()?.team_name.as_deref()
    }
}

/// Season-to-date record carried on each roster.
///
/// Sleeper splits fantasy points into an integer part and a hundredths part
/// (`fpts` = 1234, `fpts_decimal` = 56 means 1234.56).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default, deserialize_with = "de_null_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub ties: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub fpts: f64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub fpts_decimal: f64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub fpts_against: f64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub fpts_against_decimal: f64,
}

impl RosterSettings {
    pub fn points_for(&self) -> f64 {
        self.fpts + self.fpts_decimal / 100.0
    }

    pub fn points_against(&self) -> f64 {
        self.fpts_against + self.fpts_against_decimal / 100.0
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// One entry of `/league/{id}/rosters`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperRoster {
    pub roster_id: RosterId,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub taxi: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub reserve: Vec<PlayerId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: RosterSettings,
}

/// `starters_points` arrives per starter from Sleeper, but pre-summed
/// snapshots carry a single number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StartersPoints {
    Total(f64),
    PerStarter(Vec<Option<f64>>),
}

impl StartersPoints {
    pub fn total(&self) -> f64 {
        match self {
            StartersPoints::Total(t) => *t,
            StartersPoints::PerStarter(pts) => pts.iter().flatten().sum(),
        }
    }
}

/// One entry of `/league/{id}/matchups/{week}` (one team's side)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperMatchup {
    /// `null` for teams on bye / outside the bracket
    #[serde(default)]
    pub matchup_id: Option<u32>,
    pub roster_id: RosterId,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<PlayerId>,
    #[serde(default)]
    pub starters_points: Option<StartersPoints>,
    #[serde(default, alias = "custom_points")]
    pub projected_points: Option<f64>,
}

impl SleeperMatchup {
    pub fn points(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }

    /// Sum of the starters' points, or `None` when Sleeper reported none.
    pub fn starters_total(&self) -> Option<f64> {
        self.starters_points.as_ref().map(StartersPoints::total)
    }
}

/// One entry of the `/players/nfl` table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperPlayer {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub search_rank: Option<u32>,
}

pub type PlayerTable = HashMap<PlayerId, SleeperPlayer>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransactionSettings {
    #[serde(default)]
    pub waiver_bid: Option<u32>,
}

/// One entry of `/league/{id}/transactions/{week}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperTransaction {
    /// `trade`, `waiver` or `free_agent`
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "creator_id")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roster_ids: Vec<RosterId>,
    #[serde(default)]
    pub adds: Option<BTreeMap<PlayerId, RosterId>>,
    #[serde(default)]
    pub drops: Option<BTreeMap<PlayerId, RosterId>>,
    #[serde(default)]
    pub settings: Option<TransactionSettings>,
    #[serde(default)]
    pub status_updated: Option<i64>,
    #[serde(default)]
    pub created: Option<i64>,
}

impl SleeperTransaction {
    pub fn is_trade(&self) -> bool {
        self.kind == "trade"
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.status_updated.or(self.created)
    }
}

/// Everything the payload pipeline needs for one week, fully materialized.
///
/// This is also the on-disk format for `--save-snapshot` / `build --snapshot`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueSnapshot {
    pub week: Week,
    #[serde(default)]
    pub league: SleeperLeague,
    #[serde(default, deserialize_with = "de_null_default")]
    pub users: Vec<SleeperUser>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub rosters: Vec<SleeperRoster>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub matchups: Vec<SleeperMatchup>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub transactions: Vec<SleeperTransaction>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: PlayerTable,
}
