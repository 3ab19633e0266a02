//! Season standings, power rankings and the standings summary.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::config::{PlayoffConfig, RecapConfig};
use super::{round1, round3, LeagueIndex};
use crate::cli::types::RosterId;
use crate::sleeper::types::SleeperRoster;


/// Position-based playoff bucket. `Out` means "below the bubble cutoff in the
/// current standings", not mathematically eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffBucket {
    Playoff,
    Bubble,
    Out,
}

impl PlayoffBucket {
    /// Bucket for a 0-based standings position.
    pub fn for_rank_index(index: usize, config: &PlayoffConfig) -> Self {
        if index < config.playoff_spots {
            PlayoffBucket::Playoff
        } else if index < config.bubble_cutoff {
            PlayoffBucket::Bubble
        } else {
            PlayoffBucket::Out
        }
    }
}

impl fmt::Display for PlayoffBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayoffBucket::Playoff => "playoff",
            PlayoffBucket::Bubble => "bubble",
            PlayoffBucket::Out => "out",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingsRow {
    /// 1-based
    pub rank: usize,
    pub roster_id: RosterId,
    pub user_id: String,
    pub team_name: String,
    pub real_name: String,
    pub handle: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub total_games: u32,
    pub points_for: f64,
    pub points_against: f64,
    /// (wins + ties / 2) / games, as a fraction
    pub win_pct: f64,
    pub points_per_game: f64,
    pub playoff_bucket: PlayoffBucket,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PowerRankingRow {
    pub rank: usize,
    pub roster_id: RosterId,
    pub team_name: String,
    pub real_name: String,
    pub handle: String,
    pub score: f64,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
}

/// A single team singled out by the standings summary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamStat {
    pub roster_id: RosterId,
    pub handle: String,
    pub team_name: String,
    pub real_name: String,
    pub value: f64,
}

impl TeamStat {
    fn new(row: &StandingsRow, value: f64) -> Self {
        Self {
            roster_id: row.roster_id,
            handle: row.handle.clone(),
            team_name: row.team_name.clone(),
            real_name: row.real_name.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StandingsAnalysis {
    pub total_teams: usize,
    pub playoff_teams: usize,
    pub bubble_teams: usize,
    pub eliminated_teams: usize,
    /// Most season points for
    pub top_scorer: Option<TeamStat>,
    /// Lowest win percentage
    pub worst_record: Option<TeamStat>,
    /// Highest points per game
    pub most_consistent: Option<TeamStat>,
}

fn ratio(numerator: f64, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        numerator / games as f64
    }
}

/// Rank every roster by (wins desc, points for desc).
///
/// The sort is stable, so teams level on both keep their input order.
pub fn build_standings(
    rosters: &[SleeperRoster],
    index: &LeagueIndex<'_>,
    config: &RecapConfig,
) -> Vec<StandingsRow> {
    let mut ordered: Vec<&SleeperRoster> = rosters.iter().collect();
    ordered.sort_by(|a, b| {
        b.settings
            .wins
            .cmp(&a.settings.wins)
            .then_with(|| b.settings.points_for().total_cmp(&a.settings.points_for()))
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let s = &r.settings;
            let manager = index.manager(r.roster_id);
            let games = s.total_games();
            let points_for = s.points_for();

            StandingsRow {
                rank: i + 1,
                roster_id: r.roster_id,
                user_id: manager.user_id.clone(),
                team_name: manager.team_name.clone(),
                real_name: manager.real_name.clone(),
                handle: manager.handle.clone(),
                wins: s.wins,
                losses: s.losses,
                ties: s.ties,
                total_games: games,
                points_for: round1(points_for),
                points_against: round1(s.points_against()),
                win_pct: round3(ratio(s.wins as f64 + 0.5 * s.ties as f64, games)),
                points_per_game: round1(ratio(points_for, games)),
                playoff_bucket: PlayoffBucket::for_rank_index(i, &config.playoff),
            }
        })
        .collect()
}

/// `base + record_weight * (wins - losses) + points_weight * (points_for - league_avg)`
pub fn power_score(row: &StandingsRow, league_avg_points_for: f64, config: &RecapConfig) -> f64 {
    let p = &config.power;
    let record = row.wins as f64 - row.losses as f64;
    let points = row.points_for - league_avg_points_for;
    round1(p.base + p.record_weight * record + p.points_weight * points)
}

/// Power rankings over the standings. Equal scores keep standings order.
pub fn power_rankings(standings: &[StandingsRow], config: &RecapConfig) -> Vec<PowerRankingRow> {
    if standings.is_empty() {
        return Vec::new();
    }
    let avg = standings.iter().map(|r| r.points_for).sum::<f64>() / standings.len() as f64;

    let mut rows: Vec<PowerRankingRow> = standings
        .iter()
        .map(|r| PowerRankingRow {
            rank: 0,
            roster_id: r.roster_id,
            team_name: r.team_name.clone(),
            real_name: r.real_name.clone(),
            handle: r.handle.clone(),
            score: power_score(r, avg, config),
            wins: r.wins,
            losses: r.losses,
            ties: r.ties,
            points_for: r.points_for,
        })
        .collect();

    rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// First row for which `better` never finds a strictly better successor.
fn pick<'a, F>(standings: &'a [StandingsRow], better: F) -> Option<&'a StandingsRow>
where
    F: Fn(&StandingsRow, &StandingsRow) -> bool,
{
    standings
        .iter()
        .fold(None, |best: Option<&StandingsRow>, row| match best {
            Some(b) if !better(row, b) => Some(b),
            _ => Some(row),
        })
}

pub fn analyze_standings(standings: &[StandingsRow]) -> StandingsAnalysis {
    let count = |bucket: PlayoffBucket| {
        standings
            .iter()
            .filter(|r| r.playoff_bucket == bucket)
            .count()
    };

    StandingsAnalysis {
        total_teams: standings.len(),
        playoff_teams: count(PlayoffBucket::Playoff),
        bubble_teams: count(PlayoffBucket::Bubble),
        eliminated_teams: count(PlayoffBucket::Out),
        top_scorer: pick(standings, |a, b| a.points_for > b.points_for)
            .map(|r| TeamStat::new(r, r.points_for)),
        worst_record: pick(standings, |a, b| a.win_pct < b.win_pct)
            .map(|r| TeamStat::new(r, r.win_pct)),
        most_consistent: pick(standings, |a, b| a.points_per_game > b.points_per_game)
            .map(|r| TeamStat::new(r, r.points_per_game)),
    }
}
