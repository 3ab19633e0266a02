//! Season backfill: payloads for every week up to a given week
//!
//! Snapshots are fetched week by week (sharing one players table), then the
//! payloads are built in parallel since each week is an independent pure
//! computation.

use crate::{
    recap::{build_weekly_payload, config::RecapConfig, payload::WeeklyPayload},
    sleeper::{load_or_fetch_players, types::LeagueSnapshot},
    LeagueId, Result, Week,
};

use super::{
    common::{write_payloads, CommandContext, OutputOptions},
    resolve_week,
};

/// Parameters for `get season-payloads`.
#[derive(Debug, Clone, Default)]
pub struct SeasonPayloadsParams {
    pub league_id: Option<LeagueId>,
    /// Inclusive; defaults to the last completed week
    pub through_week: Option<Week>,
    pub output: OutputOptions,
    pub refresh_players: bool,
}

/// Build payloads for many weeks at once. Output is in week order.
pub fn build_season_payloads(
    snapshots: &[LeagueSnapshot],
    config: &RecapConfig,
) -> Vec<WeeklyPayload> {
    use rayon::prelude::*;
    snapshots
        .par_iter()
        .map(|snapshot| build_weekly_payload(snapshot, config))
        .collect()
}

pub async fn handle_season_payloads(params: SeasonPayloadsParams) -> Result<()> {
    let ctx = CommandContext::new(params.league_id, params.output.config.as_deref())?;
    let through = resolve_week(&ctx.client, params.through_week).await?;

    println!("Building payloads for league {} weeks 1-{}", ctx.league_id, through);

    let players = load_or_fetch_players(&ctx.client, params.refresh_players).await?;

    let mut snapshots = Vec::with_capacity(through.as_u16() as usize);
    for week_num in 1..=through.as_u16() {
        let snapshot = ctx
            .fetch_snapshot_with_players(Week::new(week_num), players.clone())
            .await?;
        snapshots.push(snapshot);
    }

    let payloads = build_season_payloads(&snapshots, &ctx.config);

    for payload in &payloads {
        let is_latest = payload.week == through;
        write_payloads(payload, &params.output.out_dir, &ctx.config, is_latest)?;
        println!("✓ Week {}: {} matchups", payload.week, payload.matchups.len());
    }

    println!(
        "✓ Wrote {} weeks to {}",
        payloads.len(),
        params.output.out_dir.display()
    );
    Ok(())
}
