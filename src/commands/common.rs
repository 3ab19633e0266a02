//! Common utilities and helper functions shared across commands.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{write_string, PayloadPaths},
    recap::{config::RecapConfig, payload::WeeklyPayload},
    sleeper::{
        load_or_fetch_players,
        types::{LeagueSnapshot, PlayerTable},
        SleeperClient,
    },
    LeagueId, Result, Week,
};

use super::resolve_league_id;

/// Default directory for written payloads.
pub const DEFAULT_OUT_DIR: &str = "weekly_summaries";

/// Where and how payload documents are written.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub out_dir: PathBuf,
    pub config: Option<PathBuf>,
    /// Also print the trimmed document to stdout
    pub print: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            config: None,
            print: false,
        }
    }
}

/// Resources needed by every command that talks to Sleeper.
pub struct CommandContext {
    pub league_id: LeagueId,
    pub client: SleeperClient,
    pub config: RecapConfig,
}

impl CommandContext {
    pub fn new(league_id: Option<LeagueId>, config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            league_id: resolve_league_id(league_id)?,
            client: SleeperClient::new()?,
            config: RecapConfig::load(config_path)?,
        })
    }

    /// Players table (cached) plus one week of league data.
    pub async fn fetch_snapshot(
        &self,
        week: Week,
        refresh_players: bool,
    ) -> Result<LeagueSnapshot> {
        let players = load_or_fetch_players(&self.client, refresh_players).await?;
        self.fetch_snapshot_with_players(week, players).await
    }

    pub async fn fetch_snapshot_with_players(
        &self,
        week: Week,
        players: PlayerTable,
    ) -> Result<LeagueSnapshot> {
        println!("Fetching league {} week {} from Sleeper...", self.league_id, week);
        self.client
            .fetch_league_snapshot(self.league_id, week, players)
            .await
    }
}

/// Write the full and trimmed documents for one week.
///
/// `week_<n>.json` and `week_<n>_trimmed.json` are always overwritten;
/// `latest.json` / `latest_trimmed.json` only when `update_latest` is set.
pub fn write_payloads(
    payload: &WeeklyPayload,
    out_dir: &Path,
    config: &RecapConfig,
    update_latest: bool,
) -> Result<PayloadPaths> {
    let paths = PayloadPaths::new(out_dir, payload.week);
    let full = serde_json::to_string_pretty(payload)?;
    let trimmed = serde_json::to_string_pretty(&payload.trimmed(config))?;

    write_string(&paths.week_full, &full)?;
    write_string(&paths.week_trimmed, &trimmed)?;
    if update_latest {
        write_string(&paths.latest_full, &full)?;
        write_string(&paths.latest_trimmed, &trimmed)?;
    }

    tracing::info!(
        week = %payload.week,
        dir = %out_dir.display(),
        update_latest,
        "wrote weekly payloads"
    );
    Ok(paths)
}

/// Save a fetched snapshot so it can be rebuilt offline with `build --snapshot`.
pub fn save_snapshot(snapshot: &LeagueSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string(snapshot)?;
    write_string(path, &json)?;
    println!("Snapshot saved to {}", path.display());
    Ok(())
}

/// Read a saved snapshot. I/O failures keep their `io::ErrorKind`.
pub fn load_snapshot(path: &Path) -> Result<LeagueSnapshot> {
    let s = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}

/// One-line summary printed after a payload is written.
pub fn print_summary(payload: &WeeklyPayload, paths: &PayloadPaths) {
    println!(
        "✓ Week {}: {} matchups, {} teams",
        payload.week,
        payload.matchups.len(),
        payload.standings.len()
    );
    if let Some(top) = &payload.highlights.top_score {
        println!("  Top score: {} ({}) {:.1}", top.team_name, top.handle, top.points);
    }
    println!("  Full:    {}", paths.week_full.display());
    println!("  Trimmed: {}", paths.week_trimmed.display());
}
