// src/sleeper/player_cache.rs
use std::path::Path;

use crate::core::{players_table_path, try_read_to_string, write_string};
use crate::sleeper::http::SleeperClient;
use crate::sleeper::types::PlayerTable;
use crate::Result;

/// Try to load the NFL players table from the cache first. If missing, empty,
/// unreadable or `refresh == true`, fetch `/players/nfl` and re-write the cache.
pub async fn load_or_fetch_players(client: &SleeperClient, refresh: bool) -> Result<PlayerTable> {
    load_or_fetch_players_at(client, &players_table_path(), refresh).await
}

pub async fn load_or_fetch_players_at(
    client: &SleeperClient,
    path: &Path,
    refresh: bool,
) -> Result<PlayerTable> {
    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(s) = try_read_to_string(path) {
            match serde_json::from_str::<PlayerTable>(&s) {
                Ok(players) if !players.is_empty() => {
                    tracing::debug!(
                        path = %path.display(),
                        players = players.len(),
                        "players table from cache"
                    );
                    return Ok(players);
                }
                Ok(_) => tracing::debug!("cached players table is empty, refetching"),
                Err(e) => tracing::warn!(error = %e, "cached players table unreadable, refetching"),
            }
        }
    }

    // 2) Fetch from API
    println!("Fetching NFL players table from Sleeper...");
    let players = client.get_players().await?;

    // 3) Write cache
    if let Ok(json_str) = serde_json::to_string(&players) {
        if let Err(e) = write_string(path, &json_str) {
            tracing::warn!(path = %path.display(), error = %e, "could not write players cache");
        }
    }

    Ok(players)
}
