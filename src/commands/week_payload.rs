//! Weekly payload command implementation

use std::path::PathBuf;

use crate::{recap::build_weekly_payload, LeagueId, Result, Week};

use super::{
    common::{print_summary, save_snapshot, write_payloads, CommandContext, OutputOptions},
    resolve_week,
};

/// Parameters for `get week-payload`.
#[derive(Debug, Clone, Default)]
pub struct WeekPayloadParams {
    pub league_id: Option<LeagueId>,
    /// Defaults to the last completed week
    pub week: Option<Week>,
    pub output: OutputOptions,
    pub refresh_players: bool,
    pub save_snapshot: Option<PathBuf>,
}

/// Fetch one week, build the payload and write all four documents.
pub async fn handle_week_payload(params: WeekPayloadParams) -> Result<()> {
    let ctx = CommandContext::new(params.league_id, params.output.config.as_deref())?;
    let week = resolve_week(&ctx.client, params.week).await?;

    let snapshot = ctx.fetch_snapshot(week, params.refresh_players).await?;
    if let Some(path) = &params.save_snapshot {
        save_snapshot(&snapshot, path)?;
    }

    let payload = build_weekly_payload(&snapshot, &ctx.config);
    let paths = write_payloads(&payload, &params.output.out_dir, &ctx.config, true)?;

    if params.output.print {
        let trimmed = payload.trimmed(&ctx.config);
        println!("{}", serde_json::to_string_pretty(&trimmed)?);
    }
    print_summary(&payload, &paths);

    Ok(())
}
