//! Weekly stat highlights derived from the analyzed matchups.
//!
//! Every highlight is independently optional: a week with no complete
//! head-to-head pairs yields `None` across the board (serialized as `null`).
//! Ties always go to the first team or game encountered in matchup order,
//! home side before away side.

use serde::{Deserialize, Serialize};

use super::analyzer::{MatchupPair, MatchupSide};
use super::round1;


/// One team's score as seen by the headline stats.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamScore {
    pub handle: String,
    pub team_name: String,
    pub real_name: String,
    pub points: f64,
}

/// Anything that can be read as two scored sides.
///
/// Implemented for full and trimmed matchups so the headline stats come out
/// the same whichever document they are derived from.
pub trait ScoredMatchup {
    fn home_score(&self) -> TeamScore;
    fn away_score(&self) -> TeamScore;
    /// Unrounded `(home, away)` points; every comparison runs on these.
    fn raw_points(&self) -> (f64, f64);
}

/// A side's emitted score next to the value it is ranked by.
struct Ranked {
    score: TeamScore,
    raw: f64,
}

impl From<&MatchupSide> for TeamScore {
    fn from(side: &MatchupSide) -> Self {
        Self {
            handle: side.handle.clone(),
            team_name: side.team_name.clone(),
            real_name: side.real_name.clone(),
            points: side.points,
        }
    }
}

impl ScoredMatchup for MatchupPair {
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

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BenchHighlight {
    pub handle: String,
    pub team_name: String,
    pub real_name: String,
    pub bench_points: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameHighlight {
    pub teams: [String; 2],
    pub managers: [String; 2],
    pub real_names: [String; 2],
    pub margin: f64,
}

impl GameHighlight {
    fn new(first: &TeamScore, second: &TeamScore, margin: f64) -> Self {
        Self {
            teams: [first.team_name.clone(), second.team_name.clone()],
            managers: [first.handle.clone(), second.handle.clone()],
            real_names: [first.real_name.clone(), second.real_name.clone()],
            margin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeltaHighlight {
    pub handle: String,
    pub team_name: String,
    pub real_name: String,
    /// actual minus starters score
    pub delta: f64,
    /// signed, e.g. "+12.4"
    pub delta_display: String,
}

/// The four stats that must survive trimming.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HeadlineStats {
    pub top_score: Option<TeamScore>,
    pub low_score: Option<TeamScore>,
    pub closest_game: Option<GameHighlight>,
    pub largest_blowout: Option<GameHighlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Highlights {
    pub top_score: Option<TeamScore>,
    pub low_score: Option<TeamScore>,
    /// Same pick as `top_score`; kept as its own field for recap writers
    pub best_manager: Option<TeamScore>,
    /// Most points left unused on the bench
    pub worst_manager: Option<BenchHighlight>,
    pub closest_game: Option<GameHighlight>,
    pub largest_blowout: Option<GameHighlight>,
    pub overachiever: Option<DeltaHighlight>,
    pub underachiever: Option<DeltaHighlight>,
}

impl Highlights {
    pub fn headline(&self) -> HeadlineStats {
        HeadlineStats {
            top_score: self.top_score.clone(),
            low_score: self.low_score.clone(),
            closest_game: self.closest_game.clone(),
            largest_blowout: self.largest_blowout.clone(),
        }
    }
}

/// Keep the first candidate unless a later one is strictly better.
fn pick_first_by<T, F>(items: impl IntoIterator<Item = T>, mut better: F) -> Option<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut best: Option<T> = None;
    for item in items {
        let replace = match &best {
            Some(current) => better(&item, current),
            None => true,
        };
        if replace {
            best = Some(item);
        }
    }
    best
}

pub fn headline_stats<M: ScoredMatchup>(matchups: &[M]) -> HeadlineStats {
    let games: Vec<(Ranked, Ranked)> = matchups
        .iter()
        .map(|m| {
            let (home_raw, away_raw) = m.raw_points();
            (
                Ranked {
                    score: m.home_score(),
                    raw: home_raw,
                },
                Ranked {
                    score: m.away_score(),
                    raw: away_raw,
                },
            )
        })
        .collect();
    let sides = || games.iter().flat_map(|(h, a)| [h, a]);
    let margin = |(h, a): &(Ranked, Ranked)| (h.raw - a.raw).abs();

    let top_score = pick_first_by(sides(), |a, b| a.raw > b.raw).map(|r| r.score.clone());
    let low_score = pick_first_by(sides(), |a, b| a.raw < b.raw).map(|r| r.score.clone());

    let closest_game = pick_first_by(games.iter(), |a, b| margin(*a) < margin(*b))
        .map(|g| GameHighlight::new(&g.0.score, &g.1.score, round1(margin(g))));

    // Blowouts list the winner first.
    let largest_blowout =
        pick_first_by(games.iter(), |a, b| margin(*a) > margin(*b)).map(|g| {
            let (h, a) = g;
            if h.raw >= a.raw {
                GameHighlight::new(&h.score, &a.score, round1(margin(g)))
            } else {
                GameHighlight::new(&a.score, &h.score, round1(margin(g)))
            }
        });

    HeadlineStats {
        top_score,
        low_score,
        closest_game,
        largest_blowout,
    }
}

fn delta_display(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{:.1}", delta)
    } else {
        format!("{:.1}", delta)
    }
}

pub fn derive_highlights(matchups: &[MatchupPair]) -> Highlights {
    let headline = headline_stats(matchups);
    let sides = || matchups.iter().flat_map(|m| [&m.home, &m.away]);

    let worst_manager = pick_first_by(sides(), |a, b| a.bench_points > b.bench_points).map(|s| {
        BenchHighlight {
            handle: s.handle.clone(),
            team_name: s.team_name.clone(),
            real_name: s.real_name.clone(),
            bench_points: s.bench_points,
        }
    });

    // Teams without a starters score are left out rather than read as zero.
    let deltas: Vec<DeltaHighlight> = sides()
        .filter_map(|s| {
            let starters = s.starters_points?;
            let delta = round1(s.raw_points - starters);
            Some(DeltaHighlight {
                handle: s.handle.clone(),
                team_name: s.team_name.clone(),
                real_name: s.real_name.clone(),
                delta,
                delta_display: delta_display(delta),
            })
        })
        .collect();

    let overachiever = pick_first_by(deltas.iter(), |a, b| a.delta > b.delta).cloned();
    let underachiever = pick_first_by(deltas.iter(), |a, b| a.delta < b.delta).cloned();

    Highlights {
        best_manager: headline.top_score.clone(),
        top_score: headline.top_score,
        low_score: headline.low_score,
        worst_manager,
        closest_game: headline.closest_game,
        largest_blowout: headline.largest_blowout,
        overachiever,
        underachiever,
    }
}
