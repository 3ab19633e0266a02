//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Week};

use crate::commands::common::{OutputOptions, DEFAULT_OUT_DIR};

/// Output arguments shared between payload-writing commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Directory for `week_<n>.json`, `week_<n>_trimmed.json` and `latest*.json`.
    #[clap(long, short = 'o', default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Recap config file (defaults to `~/.config/sleeper-recap/config.json` if present).
    #[clap(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Also print the trimmed payload to stdout.
    #[clap(long)]
    pub print: bool,
}

impl From<OutputArgs> for OutputOptions {
    fn from(args: OutputArgs) -> Self {
        Self {
            out_dir: args.out_dir,
            config: args.config,
            print: args.print,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch league metadata, users and rosters and list the managers
    LeagueData {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Print league ID, user count and scoring summary when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Build the weekly recap payload for one week.
    ///
    /// Fetches league, users, rosters, matchups and transactions for the week,
    /// plus the (cached) players table, and writes full and trimmed JSON documents.
    WeekPayload {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Week (1-18). Defaults to the last completed week from `/state/nfl`.
        #[clap(long, short)]
        week: Option<Week>,

        #[clap(flatten)]
        output: OutputArgs,

        /// Re-download the players table even if it is cached.
        #[clap(long)]
        refresh_players: bool,

        /// Also save the fetched raw data for offline `build --snapshot`.
        #[clap(long)]
        save_snapshot: Option<PathBuf>,
    },

    /// Build payloads for every week from 1 through the given week.
    SeasonPayloads {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Last week to build (inclusive). Defaults to the last completed week.
        #[clap(long, short = 't')]
        through_week: Option<Week>,

        #[clap(flatten)]
        output: OutputArgs,

        /// Re-download the players table even if it is cached.
        #[clap(long)]
        refresh_players: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-recap", about = "Sleeper fantasy football weekly recap payloads")]
pub struct SleeperRecap {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Sleeper and build payloads
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Rebuild a payload offline from a saved snapshot
    Build {
        /// Snapshot file written by `get week-payload --save-snapshot`.
        #[clap(long, short)]
        snapshot: PathBuf,

        #[clap(flatten)]
        output: OutputArgs,
    },
}
