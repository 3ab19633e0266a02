//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use sleeper_recap::{
    cli::{Commands, GetCmd, SleeperRecap},
    commands::{
        build_snapshot::handle_build,
        league_data::handle_league_data,
        season_payloads::{handle_season_payloads, SeasonPayloadsParams},
        week_payload::{handle_week_payload, WeekPayloadParams},
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs on stderr; stdout is reserved for `--print`
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = SleeperRecap::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::LeagueData {
                league_id,
                json,
                verbose,
            } => handle_league_data(league_id, json, verbose)
                .await
                .context("league-data failed")?,

            GetCmd::WeekPayload {
                league_id,
                week,
                output,
                refresh_players,
                save_snapshot,
            } => handle_week_payload(WeekPayloadParams {
                league_id,
                week,
                output: output.into(),
                refresh_players,
                save_snapshot,
            })
            .await
            .context("week-payload failed")?,

            GetCmd::SeasonPayloads {
                league_id,
                through_week,
                output,
                refresh_players,
            } => handle_season_payloads(SeasonPayloadsParams {
                league_id,
                through_week,
                output: output.into(),
                refresh_players,
            })
            .await
            .context("season-payloads failed")?,
        },

        Commands::Build { snapshot, output } => {
            handle_build(&snapshot, &output.into())
                .with_context(|| format!("build from {} failed", snapshot.display()))?
        }
    }

    Ok(())
}
