//! Waiver, free-agent and trade activity for the week.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::normalize::resolve_handle;
use super::roster::lookup_player;
use super::LeagueIndex;
use crate::cli::types::{PlayerId, RosterId};
use crate::sleeper::types::SleeperTransaction;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WaiverMove {
    /// `waiver` or `free_agent`
    pub kind: String,
    pub player_id: Option<PlayerId>,
    pub player_name: Option<String>,
    /// `@handle` of whoever made the move
    pub by: String,
    pub faab: Option<u32>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeTeam {
    pub roster_id: RosterId,
    pub handle: String,
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradedPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    /// receiving roster
    pub roster_id: RosterId,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeSummary {
    pub teams: Vec<TradeTeam>,
    pub players: Vec<TradedPlayer>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionsSummary {
    pub waivers: Vec<WaiverMove>,
    pub trades: Vec<TradeSummary>,
}

impl TransactionsSummary {
    pub fn is_empty(&self) -> bool {
        self.waivers.is_empty() && self.trades.is_empty()
    }
}

fn creator_handle(tx: &SleeperTransaction, index: &LeagueIndex<'_>) -> String {
    let owner = tx
        .creator
        .as_deref()
        .and_then(|creator| index.manager_by_user(creator));
    match owner {
        Some(m) => m.handle.clone(),
        None => resolve_handle(None),
    }
}

fn waiver_move(tx: &SleeperTransaction, index: &LeagueIndex<'_>) -> WaiverMove {
    // Pure drops have no adds; report the dropped player instead.
    let player_id = tx
        .adds
        .as_ref()
        .and_then(|adds| adds.keys().next())
        .or_else(|| tx.drops.as_ref().and_then(|drops| drops.keys().next()))
        .cloned();
    let player_name = player_id
        .as_ref()
        .map(|id| lookup_player(index.players, id).name);

    WaiverMove {
        kind: tx.kind.clone(),
        player_id,
        player_name,
        by: creator_handle(tx, index),
        faab: tx.settings.as_ref().and_then(|s| s.waiver_bid),
        timestamp: tx.timestamp(),
    }
}

fn trade_summary(tx: &SleeperTransaction, index: &LeagueIndex<'_>) -> TradeSummary {
    let teams = tx
        .roster_ids
        .iter()
        .map(|rid| {
            let m = index.manager(*rid);
            TradeTeam {
                roster_id: *rid,
                handle: m.handle.clone(),
                team_name: m.team_name.clone(),
            }
        })
        .collect();

    let adds: BTreeMap<PlayerId, RosterId> = tx.adds.clone().unwrap_or_default();
    let players = adds
        .into_iter()
        .map(|(player_id, roster_id)| TradedPlayer {
            player_name: lookup_player(index.players, &player_id).name,
            player_id,
            roster_id,
        })
        .collect();

    TradeSummary {
        teams,
        players,
        timestamp: tx.timestamp(),
    }
}

/// Split the week's transactions into waiver/free-agent moves and trades,
/// keeping Sleeper's order within each list.
pub fn summarize_transactions(
    transactions: &[SleeperTransaction],
    index: &LeagueIndex<'_>,
) -> TransactionsSummary {
    let mut summary = TransactionsSummary::default();
    for tx in transactions {
        if tx.is_trade() {
            summary.trades.push(trade_summary(tx, index));
        } else {
            summary.waivers.push(waiver_move(tx, index));
        }
    }
    summary
}
