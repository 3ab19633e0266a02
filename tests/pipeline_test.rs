//! End-to-end tests for the weekly payload pipeline

use serde_json::{json, Value};
use sleeper_recap::{
    build_weekly_payload,
    recap::{
        analyzer::{MatchupClass, Winner},
        standings::PlayoffBucket,
    },
    sleeper::types::LeagueSnapshot,
    RecapConfig, RosterId, TrimmedPayload, Week,
};

fn snapshot_json() -> Value {
    json!({
        "week": 6,
        "league": {
            "league_id": "1180208789911158784",
            "name": "Dynasty Degenerates",
            "season": "2025",
            "total_rosters": 4,
            "scoring_settings": { "rec": 0.5, "pass_td": 4.0 }
        },
        "users": [
            { "user_id": "u1", "display_name": "Kodiak", "metadata": { "team_name": "Gridiron Ghosts" } },
            { "user_id": "u2", "display_name": "davis218" },
            { "user_id": "u3", "username": "blitzboy" },
            { "user_id": "u4", "display_name": "TheCommish" }
        ],
        "rosters": [
            {
                "roster_id": 4, "owner_id": "u4",
                "players": ["4046"], "starters": ["4046"],
                "settings": { "wins": 1, "losses": 5, "fpts": 610, "fpts_decimal": 20 }
            },
            {
                "roster_id": 1, "owner_id": "u1",
                "players": ["6794", "4984"], "starters": ["6794"],
                "settings": { "wins": 5, "losses": 1, "fpts": 812, "fpts_decimal": 40 }
            },
            {
                "roster_id": 2, "owner_id": "u2",
                "settings": { "wins": 3, "losses": 3, "fpts": 700 }
            },
            {
                "roster_id": 3, "owner_id": "u3",
                "settings": { "wins": 3, "losses": 3, "fpts": 720 }
            }
        ],
        "matchups": [
            { "matchup_id": 1, "roster_id": 1, "points": 145.2, "projected_points": 120.0 },
            { "matchup_id": 1, "roster_id": 2, "points": 132.8, "projected_points": 118.0 },
            { "matchup_id": 2, "roster_id": 3, "points": 80.0, "projected_points": 110.0 },
            { "matchup_id": 2, "roster_id": 4, "points": 150.5, "projected_points": 112.0 }
        ],
        "transactions": [
            {
                "type": "waiver",
                "status": "complete",
                "creator": "u2",
                "roster_ids": [2],
                "adds": { "4984": 2 },
                "settings": { "waiver_bid": 17 },
                "status_updated": 1696000000000i64
            }
        ],
        "players": {
            "4046": { "full_name": "Patrick Mahomes", "position": "QB", "team": "KC", "search_rank": 10 },
            "6794": { "first_name": "Justin", "last_name": "Jefferson", "position": "WR", "team": "MIN" },
            "4984": { "full_name": "Josh Allen", "position": "QB", "team": "BUF" }
        }
    })
}

fn snapshot() -> LeagueSnapshot {
    serde_json::from_value(snapshot_json()).unwrap()
}

#[test]
fn test_payload_is_deterministic() {
    let config = RecapConfig::default();
    let first = serde_json::to_string(&build_weekly_payload(&snapshot(), &config)).unwrap();
    let second = serde_json::to_string(&build_weekly_payload(&snapshot(), &config)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_matchups_and_headlines() {
    let payload = build_weekly_payload(&snapshot(), &RecapConfig::default());

    assert_eq!(payload.week, Week::new(6));
    assert_eq!(payload.matchups.len(), 2);

    let first = &payload.matchups[0];
    assert_eq!(first.home.handle, "@Kodiak");
    assert_eq!(first.home.team_name, "Gridiron Ghosts");
    assert_eq!(first.margin, 12.4);
    assert_eq!(first.classification, MatchupClass::Standard);
    assert_eq!(first.winner, Winner::Home);
    assert!(first.is_key_matchup);

    let second = &payload.matchups[1];
    assert_eq!(second.margin, 70.5);
    assert_eq!(second.classification, MatchupClass::Blowout);
    assert_eq!(second.winner, Winner::Away);

    let h = &payload.highlights;
    assert_eq!(h.top_score.as_ref().unwrap().handle, "@TheCommish");
    assert_eq!(h.low_score.as_ref().unwrap().handle, "@blitzboy");
    assert_eq!(h.best_manager, h.top_score);
    assert_eq!(h.closest_game.as_ref().unwrap().margin, 12.4);

    let blowout = h.largest_blowout.as_ref().unwrap();
    assert_eq!(blowout.margin, 70.5);
    assert_eq!(blowout.managers, ["@TheCommish".to_string(), "@blitzboy".to_string()]);
}

#[test]
fn test_managers_and_standings() {
    let payload = build_weekly_payload(&snapshot(), &RecapConfig::default());

    let ids: Vec<u32> = payload.managers.iter().map(|m| m.roster_id.as_u32()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    // 3-3 teams separated by points for
    let order: Vec<u32> = payload.standings.iter().map(|s| s.roster_id.as_u32()).collect();
    assert_eq!(order, vec![1, 3, 2, 4]);
    assert_eq!(payload.standings[0].rank, 1);
    assert_eq!(payload.standings[0].points_for, 812.4);
    assert_eq!(payload.standings[0].win_pct, 0.833);
    assert!(payload
        .standings
        .iter()
        .all(|s| s.playoff_bucket == PlayoffBucket::Playoff));

    assert_eq!(payload.power_rankings.len(), 4);
    assert_eq!(payload.power_rankings[0].roster_id, RosterId::new(1));
}

#[test]
fn test_rosters_and_transactions() {
    let payload = build_weekly_payload(&snapshot(), &RecapConfig::default());

    let kodiak = payload
        .rosters
        .iter()
        .find(|r| r.roster_id == RosterId::new(1))
        .unwrap();
    assert_eq!(kodiak.players.len(), 2);
    assert_eq!(kodiak.position_counts.get("WR"), Some(&1));
    assert_eq!(kodiak.position_counts.get("QB"), Some(&1));

    let waivers = &payload.transactions.waivers;
    assert_eq!(waivers.len(), 1);
    assert_eq!(waivers[0].by, "@davis218");
    assert_eq!(waivers[0].player_name.as_deref(), Some("Josh Allen"));
    assert_eq!(waivers[0].faab, Some(17));
    assert!(payload.transactions.trades.is_empty());
}

#[test]
fn test_three_member_group_is_dropped() {
    let mut raw = snapshot_json();
    raw["matchups"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "matchup_id": 2, "roster_id": 2, "points": 99.0 }));
    let snapshot: LeagueSnapshot = serde_json::from_value(raw).unwrap();

    let payload = build_weekly_payload(&snapshot, &RecapConfig::default());
    assert_eq!(payload.matchups.len(), 1);
    assert_eq!(payload.matchups[0].matchup_id, 1);
    assert_eq!(payload.highlights.largest_blowout.as_ref().unwrap().margin, 12.4);
}

#[test]
fn test_trimmed_round_trip_keeps_headlines() {
    let config = RecapConfig::default();
    let payload = build_weekly_payload(&snapshot(), &config);
    let trimmed = payload.trimmed(&config);

    let json = serde_json::to_string(&trimmed).unwrap();
    assert!(!json.contains("scoring_settings"));

    let parsed: TrimmedPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.rederive_headline(), payload.highlights.headline());
}

#[test]
fn test_two_decimal_points_classify_before_rounding() {
    let mut raw = snapshot_json();
    raw["matchups"] = json!([
        { "matchup_id": 1, "roster_id": 1, "points": 101.96, "projected_points": 110.0 },
        { "matchup_id": 1, "roster_id": 2, "points": 100.0, "projected_points": 105.0 },
        { "matchup_id": 2, "roster_id": 3, "points": 100.0, "projected_points": 110.0 },
        { "matchup_id": 2, "roster_id": 4, "points": 120.04, "projected_points": 105.0 }
    ]);
    let snapshot: LeagueSnapshot = serde_json::from_value(raw).unwrap();
    let config = RecapConfig::default();
    let payload = build_weekly_payload(&snapshot, &config);

    assert_eq!(payload.matchups[0].margin, 2.0);
    assert_eq!(payload.matchups[0].classification, MatchupClass::NailBiter);
    assert_eq!(payload.matchups[1].margin, 20.0);
    assert_eq!(payload.matchups[1].classification, MatchupClass::Blowout);
    assert_eq!(payload.matchups[1].away.points, 120.0);
    assert_eq!(payload.matchups[1].away.raw_points, 120.04);

    let json = serde_json::to_string(&payload.trimmed(&config)).unwrap();
    let parsed: TrimmedPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.rederive_headline(), payload.highlights.headline());
}

#[test]
fn test_empty_league_yields_empty_payload() {
    let mut raw = snapshot_json();
    raw["users"] = json!([]);
    let snapshot: LeagueSnapshot = serde_json::from_value(raw).unwrap();

    let payload = build_weekly_payload(&snapshot, &RecapConfig::default());
    assert_eq!(payload.league.name, "Dynasty Degenerates");
    assert!(payload.matchups.is_empty());
    assert!(payload.standings.is_empty());
    assert!(payload.highlights.top_score.is_none());

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["highlights"]["closest_game"], Value::Null);
}
