//! Roster slot classification and player lookup.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::normalize::{first_non_empty, Manager};
use crate::cli::types::{PlayerId, RosterId};
use crate::sleeper::types::{PlayerTable, SleeperRoster};

pub const UNKNOWN_PLAYER: &str = "Unknown Player";
pub const UNKNOWN_POSITION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub nfl_team: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_rank: Option<u32>,
}

impl Player {
    /// Stand-in for an id the players table does not know.
    pub fn unknown(player_id: PlayerId) -> Self {
        Self {
            player_id,
            name: UNKNOWN_PLAYER.to_string(),
            position: UNKNOWN_POSITION.to_string(),
            nfl_team: "FA".to_string(),
            status: "Unknown".to_string(),
            injury_status: None,
            search_rank: None,
        }
    }
}

/// Resolve a player id against the table, falling back to the sentinel.
pub fn lookup_player(players: &PlayerTable, id: &PlayerId) -> Player {
    let Some(p) = players.get(id) else {
        tracing::debug!(player_id = %id, "player not in table, using sentinel");
        return Player::unknown(id.clone());
    };

    let joined = match (p.first_name.as_deref(), p.last_name.as_deref()) {
        (Some(first), Some(last)) => Some(format!("{} {}", first.trim(), last.trim())),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    };
    let name = first_non_empty([p.full_name.as_deref(), joined.as_deref()])
        .unwrap_or(UNKNOWN_PLAYER)
        .to_string();

    Player {
        player_id: id.clone(),
        name,
        position: first_non_empty([p.position.as_deref()])
            .unwrap_or(UNKNOWN_POSITION)
            .to_string(),
        nfl_team: first_non_empty([p.team.as_deref()]).unwrap_or("FA").to_string(),
        status: first_non_empty([p.status.as_deref()])
            .unwrap_or("Unknown")
            .to_string(),
        injury_status: first_non_empty([p.injury_status.as_deref()]).map(String::from),
        search_rank: p.search_rank,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterSlot {
    Starter,
    Bench,
    Taxi,
    Ir,
}

impl fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RosterSlot::Starter => "starter",
            RosterSlot::Bench => "bench",
            RosterSlot::Taxi => "taxi",
            RosterSlot::Ir => "ir",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosteredPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub slot: RosterSlot,
    /// Lineup position (0-based) when the player is a starter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub roster_id: RosterId,
    pub manager: Manager,
    pub players: Vec<RosteredPlayer>,
    pub position_counts: BTreeMap<String, u32>,
}

impl RosterEntry {
    pub fn slot_of(&self, id: &PlayerId) -> Option<RosterSlot> {
        self.players
            .iter()
            .find(|p| &p.player.player_id == id)
            .map(|p| p.slot)
    }

    pub fn players_in(&self, slot: RosterSlot) -> impl Iterator<Item = &RosteredPlayer> {
        self.players.iter().filter(move |p| p.slot == slot)
    }
}

/// Label every rostered player with a slot.
///
/// Everyone in `players` starts on the bench; then `starters`, `taxi` and
/// `reserve` overwrite in that order, so an id listed twice ends up in the
/// later list's slot.
pub fn classify_roster(
    roster: &SleeperRoster,
    manager: Manager,
    players: &PlayerTable,
) -> RosterEntry {
    let mut order: Vec<PlayerId> = Vec::with_capacity(roster.players.len());
    let mut slots: HashMap<PlayerId, (RosterSlot, Option<usize>)> = HashMap::new();

    let mut assign = |id: &PlayerId, slot: RosterSlot, starter_index: Option<usize>| {
        if id.is_empty_slot() {
            return;
        }
        if !slots.contains_key(id) {
            order.push(id.clone());
        }
        slots.insert(id.clone(), (slot, starter_index));
    };

    for id in &roster.players {
        assign(id, RosterSlot::Bench, None);
    }
    for (idx, id) in roster.starters.iter().enumerate() {
        assign(id, RosterSlot::Starter, Some(idx));
    }
    for id in &roster.taxi {
        assign(id, RosterSlot::Taxi, None);
    }
    for id in &roster.reserve {
        assign(id, RosterSlot::Ir, None);
    }

    let rostered: Vec<RosteredPlayer> = order
        .into_iter()
        .map(|id| {
            let (slot, starter_index) = slots[&id];
            RosteredPlayer {
                player: lookup_player(players, &id),
                slot,
                starter_index,
            }
        })
        .collect();

    let mut position_counts = BTreeMap::new();
    for p in &rostered {
        *position_counts.entry(p.player.position.clone()).or_insert(0) += 1;
    }

    RosterEntry {
        roster_id: roster.roster_id,
        manager,
        players: rostered,
        position_counts,
    }
}
