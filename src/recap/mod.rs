//! The weekly payload pipeline.
//!
//! Everything under this module is synchronous and I/O free: it takes a fully
//! materialized [`LeagueSnapshot`] and returns a [`WeeklyPayload`]. Anomalies
//! in the upstream data are logged and skipped, never returned as errors.

pub mod analyzer;
pub mod config;
pub mod highlights;
pub mod normalize;
pub mod pairing;
pub mod payload;
pub mod roster;
pub mod standings;
pub mod transactions;

use std::collections::HashMap;

use crate::cli::types::{PlayerId, RosterId};
use crate::sleeper::types::{LeagueSnapshot, PlayerTable, SleeperRoster, SleeperUser};

use analyzer::analyze_matchup;
use config::RecapConfig;
use highlights::derive_highlights;
use normalize::{normalize_manager, Manager};
use pairing::pair_matchups;
use payload::{LeagueInfo, ManagerEntry, WeeklyPayload};
use roster::classify_roster;
use standings::{analyze_standings, build_standings, power_rankings};
use transactions::summarize_transactions;

/// Round to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to three decimal places.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Lookups shared by every stage of one payload build.
pub struct LeagueIndex<'a> {
    managers: HashMap<RosterId, Manager>,
    sentinel: Manager,
    rosters: HashMap<RosterId, &'a SleeperRoster>,
    pub players: &'a PlayerTable,
}

impl<'a> LeagueIndex<'a> {
    pub fn new(snapshot: &'a LeagueSnapshot, config: &RecapConfig) -> Self {
        let users: HashMap<&str, &SleeperUser> = snapshot
            .users
            .iter()
            .map(|u| (u.user_id.as_str(), u))
            .collect();

        let managers = snapshot
            .rosters
            .iter()
            .map(|r| {
                let owner = r.owner_id.as_deref();
                let user = owner.and_then(|id| users.get(id).copied());
                (r.roster_id, normalize_manager(user, owner, config))
            })
            .collect();

        Self {
            managers,
            sentinel: normalize_manager(None, None, config),
            rosters: snapshot.rosters.iter().map(|r| (r.roster_id, r)).collect(),
            players: &snapshot.players,
        }
    }

    /// Manager owning a roster; the sentinel manager for unknown roster ids.
    pub fn manager(&self, roster_id: RosterId) -> &Manager {
        self.managers.get(&roster_id).unwrap_or(&self.sentinel)
    }

    /// Manager whose user id owns a roster in this league.
    pub fn manager_by_user(&self, user_id: &str) -> Option<&Manager> {
        let mut owned: Vec<(&RosterId, &Manager)> = self
            .managers
            .iter()
            .filter(|(_, m)| m.user_id == user_id)
            .collect();
        owned.sort_by_key(|(rid, _)| **rid);
        owned.first().map(|(_, m)| *m)
    }

    /// The roster's current starters, empty for unknown rosters.
    pub fn roster_starters(&self, roster_id: RosterId) -> &[PlayerId] {
        self.rosters
            .get(&roster_id)
            .map(|r| r.starters.as_slice())
            .unwrap_or(&[])
    }
}

/// Build the full weekly payload from one week of league data.
///
/// Deterministic: the same snapshot and config always serialize to the same
/// bytes. Rosters and managers are listed in roster id order; matchups keep
/// the order Sleeper reported them in.
pub fn build_weekly_payload(snapshot: &LeagueSnapshot, config: &RecapConfig) -> WeeklyPayload {
    let league = LeagueInfo::from_league(&snapshot.league);

    if snapshot.users.is_empty() || snapshot.rosters.is_empty() {
        tracing::warn!(
            week = %snapshot.week,
            users = snapshot.users.len(),
            rosters = snapshot.rosters.len(),
            "league has no users or rosters, emitting empty payload"
        );
        return WeeklyPayload::empty(snapshot.week, league);
    }

    let index = LeagueIndex::new(snapshot, config);

    let mut sorted: Vec<&SleeperRoster> = snapshot.rosters.iter().collect();
    sorted.sort_by_key(|r| r.roster_id);

    let managers: Vec<ManagerEntry> = sorted
        .iter()
        .map(|r| ManagerEntry {
            roster_id: r.roster_id,
            manager: index.manager(r.roster_id).clone(),
        })
        .collect();

    let rosters = sorted
        .iter()
        .map(|r| classify_roster(r, index.manager(r.roster_id).clone(), index.players))
        .collect();

    let matchups: Vec<_> = pair_matchups(&snapshot.matchups)
        .into_iter()
        .map(|pair| analyze_matchup(pair, &index, config))
        .collect();
    let highlights = derive_highlights(&matchups);

    let standings = build_standings(&snapshot.rosters, &index, config);
    let power = power_rankings(&standings, config);
    let standings_analysis = analyze_standings(&standings);

    let transactions = summarize_transactions(&snapshot.transactions, &index);

    tracing::debug!(
        week = %snapshot.week,
        matchups = matchups.len(),
        teams = standings.len(),
        "built weekly payload"
    );

    WeeklyPayload {
        week: snapshot.week,
        league,
        managers,
        rosters,
        matchups,
        standings,
        standings_analysis,
        power_rankings: power,
        highlights,
        transactions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.44), 12.4);
        assert_eq!(round1(12.45000001), 12.5);
        assert_eq!(round1(-3.26), -3.3);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(2.0 / 3.0), 0.667);
        assert_eq!(round3(0.5), 0.5);
    }

    #[test]
    fn test_index_sentinel_for_unknown_roster() {
        let snapshot = LeagueSnapshot::default();
        let index = LeagueIndex::new(&snapshot, &RecapConfig::default());
        assert_eq!(index.manager(RosterId::new(42)).team_name, normalize::UNKNOWN_TEAM);
        assert!(index.roster_starters(RosterId::new(42)).is_empty());
    }

    #[test]
    fn test_empty_users_gives_empty_payload() {
        let snapshot = LeagueSnapshot {
            rosters: vec![SleeperRoster::default()],
            ..Default::default()
        };
        let payload = build_weekly_payload(&snapshot, &RecapConfig::default());
        assert!(payload.matchups.is_empty());
        assert!(payload.standings.is_empty());
        assert!(payload.highlights.top_score.is_none());
    }
}
