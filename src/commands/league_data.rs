//! League data command implementation

use crate::{
    recap::{config::RecapConfig, LeagueIndex},
    sleeper::{types::LeagueSnapshot, SleeperClient},
    LeagueId, Result,
};

use super::resolve_league_id;

/// Fetch league metadata, users and rosters and list the managers.
pub async fn handle_league_data(
    league_id: Option<LeagueId>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = SleeperClient::new()?;
    let config = RecapConfig::load(None)?;

    println!("Loading league {} from Sleeper...", league_id);

    let (league, users, rosters) = tokio::try_join!(
        client.get_league(league_id),
        client.get_users(league_id),
        client.get_rosters(league_id),
    )?;

    let snapshot = LeagueSnapshot {
        league,
        users,
        rosters,
        ..Default::default()
    };
    let index = LeagueIndex::new(&snapshot, &config);

    let mut rosters: Vec<_> = snapshot.rosters.iter().collect();
    rosters.sort_by_key(|r| r.roster_id);

    if json {
        let managers: Vec<_> = rosters
            .iter()
            .map(|r| {
                serde_json::json!({
                    "roster_id": r.roster_id,
                    "manager": index.manager(r.roster_id),
                    "wins": r.settings.wins,
                    "losses": r.settings.losses,
                    "ties": r.settings.ties,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&managers)?);
        return Ok(());
    }

    println!(
        "✓ {} ({} season, {} teams)",
        snapshot.league.name.as_deref().unwrap_or("Unnamed league"),
        snapshot.league.season.as_deref().unwrap_or("?"),
        rosters.len()
    );
    for r in &rosters {
        let m = index.manager(r.roster_id);
        println!(
            "  {:>2}  {:<28} {:<20} {}-{}-{}",
            r.roster_id.as_u32(),
            m.team_name,
            m.handle,
            r.settings.wins,
            r.settings.losses,
            r.settings.ties
        );
    }

    if verbose {
        println!("League ID: {}", league_id);
        println!("Users: {}", snapshot.users.len());
        let scoring = snapshot.league.scoring_settings.as_ref();
        if let Some(settings) = scoring.and_then(|s| s.as_object()) {
            println!("Scoring settings: {} items", settings.len());
        }
    }

    Ok(())
}
