//! The full and trimmed weekly documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::analyzer::{MatchupClass, MatchupPair, MatchupSide, Winner};
use super::config::RecapConfig;
use super::highlights::{headline_stats, HeadlineStats, Highlights, ScoredMatchup, TeamScore};
use super::normalize::Manager;
use super::roster::RosterEntry;
use super::standings::{PlayoffBucket, PowerRankingRow, StandingsAnalysis, StandingsRow};
use super::transactions::TransactionsSummary;
use crate::cli::types::{RosterId, Week};
use crate::sleeper::types::SleeperLeague;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeagueInfo {
    pub id: String,
    pub name: String,
    pub season: String,
    pub scoring_settings: Value,
}

impl LeagueInfo {
    pub fn from_league(league: &SleeperLeague) -> Self {
        Self {
            id: league.league_id.clone(),
            name: league.name.clone().unwrap_or_default(),
            season: league.season.clone().unwrap_or_default(),
            scoring_settings: league
                .scoring_settings
                .clone()
                .unwrap_or_else(|| Value::Object(Default::default())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManagerEntry {
    pub roster_id: RosterId,
    #[serde(flatten)]
    pub manager: Manager,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeeklyPayload {
    pub week: Week,
    pub league: LeagueInfo,
    pub managers: Vec<ManagerEntry>,
    pub rosters: Vec<RosterEntry>,
    pub matchups: Vec<MatchupPair>,
    pub standings: Vec<StandingsRow>,
    pub standings_analysis: StandingsAnalysis,
    pub power_rankings: Vec<PowerRankingRow>,
    pub highlights: Highlights,
    pub transactions: TransactionsSummary,
}

impl WeeklyPayload {
    /// A payload with league metadata and nothing else.
    pub fn empty(week: Week, league: LeagueInfo) -> Self {
        Self {
            week,
            league,
            managers: Vec::new(),
            rosters: Vec::new(),
            matchups: Vec::new(),
            standings: Vec::new(),
            standings_analysis: StandingsAnalysis::default(),
            power_rankings: Vec::new(),
            highlights: Highlights::default(),
            transactions: TransactionsSummary::default(),
        }
    }

    /// Trimmed projection sized by `config.trimmed_power_rankings`.
    pub fn trimmed(&self, config: &RecapConfig) -> TrimmedPayload {
        self.trimmed_top(config.trimmed_power_rankings)
    }

    /// Trimmed projection keeping the first `power_rankings` ranking rows.
    pub fn trimmed_top(&self, power_rankings: usize) -> TrimmedPayload {
        TrimmedPayload {
            week: self.week,
            league: TrimmedLeague {
                id: self.league.id.clone(),
                name: self.league.name.clone(),
                season: self.league.season.clone(),
            },
            managers: self
                .managers
                .iter()
                .map(|e| TrimmedManager {
                    roster_id: e.roster_id,
                    handle: e.manager.handle.clone(),
                    team_name: e.manager.team_name.clone(),
                    real_name: e.manager.real_name.clone(),
                })
                .collect(),
            standings: self.standings.iter().map(TrimmedStanding::from).collect(),
            matchups: self.matchups.iter().map(TrimmedMatchup::from).collect(),
            power_rankings: self
                .power_rankings
                .iter()
                .take(power_rankings)
                .cloned()
                .collect(),
            highlights: self.highlights.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrimmedLeague {
    pub id: String,
    pub name: String,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrimmedManager {
    pub roster_id: RosterId,
    pub handle: String,
    pub team_name: String,
    pub real_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrimmedStanding {
    pub rank: usize,
    pub roster_id: RosterId,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub playoff_bucket: PlayoffBucket,
}

impl From<&StandingsRow> for TrimmedStanding {
    fn from(row: &StandingsRow) -> Self {
        Self {
            rank: row.rank,
            roster_id: row.roster_id,
            team_name: row.team_name.clone(),
            wins: row.wins,
            losses: row.losses,
            ties: row.ties,
            points_for: row.points_for,
            playoff_bucket: row.playoff_bucket,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrimmedSide {
    pub roster_id: RosterId,
    pub handle: String,
    pub team_name: String,
    pub real_name: String,
    pub points: f64,
    /// Kept so headline stats re-derive exactly from this document
    pub raw_points: f64,
    pub projected_points: f64,
}

impl From<&MatchupSide> for TrimmedSide {
    fn from(side: &MatchupSide) -> Self {
        Self {
            roster_id: side.roster_id,
            handle: side.handle.clone(),
            team_name: side.team_name.clone(),
            real_name: side.real_name.clone(),
            points: side.points,
            raw_points: side.raw_points,
            projected_points: side.projected_points,
        }
    }
}

impl From<&TrimmedSide> for TeamScore {
    fn from(side: &TrimmedSide) -> Self {
        Self {
            handle: side.handle.clone(),
            team_name: side.team_name.clone(),
            real_name: side.real_name.clone(),
            points: side.points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrimmedMatchup {
    pub matchup_id: u32,
    pub home: TrimmedSide,
    pub away: TrimmedSide,
    pub margin: f64,
    pub classification: MatchupClass,
    pub is_key_matchup: bool,
    pub winner: Winner,
    pub prediction: String,
}

impl From<&MatchupPair> for TrimmedMatchup {
    fn from(m: &MatchupPair) -> Self {
        Self {
            matchup_id: m.matchup_id,
            home: TrimmedSide::from(&m.home),
            away: TrimmedSide::from(&m.away),
            margin: m.margin,
            classification: m.classification,
            is_key_matchup: m.is_key_matchup,
            winner: m.winner,
            prediction: m.prediction.clone(),
        }
    }
}

impl ScoredMatchup for TrimmedMatchup {
    fn home_score(&self) -> TeamScore {
        TeamScore::from(&self.home)
    }

    fn away_score(&self) -> TeamScore {
        TeamScore::from(&self.away)
    }

    fn raw_points(&self) -> (f64, f64) {
        (self.home.raw_points, self.away.raw_points)
    }
}

/// Compact document for prompt filling.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrimmedPayload {
    pub week: Week,
    pub league: TrimmedLeague,
    pub managers: Vec<TrimmedManager>,
    pub standings: Vec<TrimmedStanding>,
    pub matchups: Vec<TrimmedMatchup>,
    pub power_rankings: Vec<PowerRankingRow>,
    pub highlights: Highlights,
}

impl TrimmedPayload {
    /// Headline stats recomputed from the trimmed matchups alone.
    pub fn rederive_headline(&self) -> HeadlineStats {
        headline_stats(&self.matchups)
    }
}
