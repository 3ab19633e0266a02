//! Matchup projections, classification and prediction text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{MatchupThresholds, RecapConfig};
use super::pairing::PairedRecords;
use super::{round1, LeagueIndex};
use crate::cli::types::RosterId;
use crate::sleeper::types::SleeperMatchup;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupClass {
    Blowout,
    NailBiter,
    Standard,
}

impl fmt::Display for MatchupClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchupClass::Blowout => "blowout",
            MatchupClass::NailBiter => "nail_biter",
            MatchupClass::Standard => "standard",
        };
        write!(f, "{}", s)
    }
}

/// Which template produced the prediction sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    Blowout,
    NailBiter,
    HighProjection,
    Mismatch,
    Competitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionSource {
    /// Sleeper supplied a non-zero projection
    Sleeper,
    /// Synthesized from the starters' search ranks
    SearchRank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Home,
    Away,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchupSide {
    pub roster_id: RosterId,
    pub user_id: String,
    pub team_name: String,
    pub real_name: String,
    pub handle: String,
    pub points: f64,
    /// Points as Sleeper reported them; margins and comparisons use these
    pub raw_points: f64,
    /// Starters-only score; `None` when Sleeper reported none (or zero)
    pub starters_points: Option<f64>,
    pub bench_points: f64,
    pub projected_points: f64,
    pub projection_source: ProjectionSource,
}

impl MatchupSide {
    /// "Team Name (Real Name)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.team_name, self.real_name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchupPair {
    pub matchup_id: u32,
    pub home: MatchupSide,
    pub away: MatchupSide,
    pub margin: f64,
    pub projected_margin: f64,
    pub classification: MatchupClass,
    pub is_key_matchup: bool,
    pub prediction: String,
    pub prediction_kind: PredictionKind,
    pub winner: Winner,
}

/// margin > blowout -> blowout; margin < nail-biter -> nail_biter; else standard
pub fn classify_margin(margin: f64, t: &MatchupThresholds) -> MatchupClass {
    if margin > t.blowout_margin {
        MatchupClass::Blowout
    } else if margin < t.nail_biter_margin {
        MatchupClass::NailBiter
    } else {
        MatchupClass::Standard
    }
}

pub fn is_key_matchup(margin: f64, proj_home: f64, proj_away: f64, t: &MatchupThresholds) -> bool {
    margin > t.key_margin
        || margin < t.nail_biter_margin
        || proj_home > t.high_projection
        || proj_away > t.high_projection
        || (proj_home - proj_away).abs() > t.projection_gap
}

/// Sleeper's projection when it is positive, otherwise a search-rank proxy
/// summed over the starters.
pub fn project_side(
    record: &SleeperMatchup,
    index: &LeagueIndex<'_>,
    config: &RecapConfig,
) -> (f64, ProjectionSource) {
    if let Some(p) = record.projected_points.filter(|p| *p > 0.0) {
        return (p, ProjectionSource::Sleeper);
    }

    let starters = if record.starters.is_empty() {
        index.roster_starters(record.roster_id)
    } else {
        record.starters.as_slice()
    };

    let total: f64 = starters
        .iter()
        .filter(|id| !id.is_empty_slot())
        .map(|id| {
            let rank = index.players.get(id).and_then(|p| p.search_rank);
            config.projection.project(rank)
        })
        .sum();
    (total, ProjectionSource::SearchRank)
}

/// The side as emitted plus its unrounded projection.
fn build_side(
    record: &SleeperMatchup,
    index: &LeagueIndex<'_>,
    config: &RecapConfig,
) -> (MatchupSide, f64) {
    let manager = index.manager(record.roster_id);
    let points = record.points();
    let starters_points = record.starters_total().filter(|s| *s != 0.0);
    let (projected_points, projection_source) = project_side(record, index, config);

    let side = MatchupSide {
        roster_id: record.roster_id,
        user_id: manager.user_id.clone(),
        team_name: manager.team_name.clone(),
        real_name: manager.real_name.clone(),
        handle: manager.handle.clone(),
        points: round1(points),
        raw_points: points,
        starters_points: starters_points.map(round1),
        bench_points: round1(points - starters_points.unwrap_or(0.0)),
        projected_points: round1(projected_points),
        projection_source,
    };
    (side, projected_points)
}

/// `margin` and `projected` are unrounded; the text shows one decimal.
fn predict(
    home: &MatchupSide,
    away: &MatchupSide,
    margin: f64,
    projected: (f64, f64),
    t: &MatchupThresholds,
) -> (PredictionKind, String) {
    let (proj_home, proj_away) = projected;
    let (leader, trailer) = if home.raw_points >= away.raw_points {
        (home, away)
    } else {
        (away, home)
    };
    let (favorite, underdog) = if proj_home >= proj_away {
        (home, away)
    } else {
        (away, home)
    };
    let gap = (proj_home - proj_away).abs();

    match classify_margin(margin, t) {
        MatchupClass::Blowout => (
            PredictionKind::Blowout,
            format!(
                "{} flattens {} by {:.1} points. This one was over before kickoff.",
                leader.label(),
                trailer.label(),
                margin
            ),
        ),
        MatchupClass::NailBiter => (
            PredictionKind::NailBiter,
            format!(
                "{} and {} are separated by {:.1} points. Every lineup decision matters in this nail-biter.",
                home.label(),
                away.label(),
                margin
            ),
        ),
        MatchupClass::Standard if proj_home > t.high_projection
            || proj_away > t.high_projection =>
        {
            (
                PredictionKind::HighProjection,
                format!(
                    "{} ({:.1} projected) meets {} ({:.1} projected). Expect a shootout.",
                    home.label(),
                    home.projected_points,
                    away.label(),
                    away.projected_points
                ),
            )
        }
        MatchupClass::Standard if gap > t.projection_gap => (
            PredictionKind::Mismatch,
            format!(
                "On paper {} is {:.1} points better than {}. Upset alert if the favorite sleepwalks.",
                favorite.label(),
                gap,
                underdog.label()
            ),
        ),
        MatchupClass::Standard => (
            PredictionKind::Competitive,
            format!(
                "{} vs {} shapes up as a competitive battle.",
                home.label(),
                away.label()
            ),
        ),
    }
}

/// Turn a raw pair into a fully analyzed matchup.
pub fn analyze_matchup(
    pair: PairedRecords<'_>,
    index: &LeagueIndex<'_>,
    config: &RecapConfig,
) -> MatchupPair {
    let (home, proj_home) = build_side(pair.home, index, config);
    let (away, proj_away) = build_side(pair.away, index, config);
    let t = &config.matchup;

    // Thresholds apply to unrounded values; only emitted numbers are rounded.
    let raw_margin = (home.raw_points - away.raw_points).abs();
    let classification = classify_margin(raw_margin, t);
    let is_key = is_key_matchup(raw_margin, proj_home, proj_away, t);
    let (prediction_kind, prediction) =
        predict(&home, &away, raw_margin, (proj_home, proj_away), t);
    let winner = if home.raw_points > away.raw_points {
        Winner::Home
    } else if away.raw_points > home.raw_points {
        Winner::Away
    } else {
        Winner::Tie
    };

    MatchupPair {
        matchup_id: pair.matchup_id,
        home,
        away,
        margin: round1(raw_margin),
        projected_margin: round1((proj_home - proj_away).abs()),
        classification,
        is_key_matchup: is_key,
        prediction,
        prediction_kind,
        winner,
    }
}
